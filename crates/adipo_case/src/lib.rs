//! Raw case model for obesity-level triage.
//!
//! A [`RawCase`] is one subject's clinical and lifestyle answers in their
//! natural units: height in centimetres, weight in kilograms, categorical
//! answers as the literal values used by the historical dataset.
//!
//! Categorical answers are tagged variants rather than strings, so an
//! unknown literal is rejected when it is parsed instead of being silently
//! mapped to a default:
//!
//! ```
//! use adipo_case::{CaseError, Frequency, Gender};
//!
//! assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
//! assert_eq!(Frequency::Sometimes.as_str(), "Sometimes");
//! assert!(matches!(
//!     "Often".parse::<Frequency>(),
//!     Err(CaseError::UnknownCategoryValue { .. })
//! ));
//! ```
//!
//! Body-mass index helpers mirror the dashboard's BMI panel:
//!
//! ```
//! use adipo_case::{bmi, BmiStatus};
//!
//! let value = bmi(70.0, 1.70);
//! assert!((value - 24.22).abs() < 0.01);
//! assert_eq!(BmiStatus::from_bmi(value), BmiStatus::Healthy);
//! ```
pub mod bmi;
pub mod case;
pub mod category;
pub mod error;
pub mod fields;
pub mod level;

pub use bmi::{bmi, BmiStatus};
pub use case::RawCase;
pub use category::{DeviceUsage, Frequency, Gender, Transport, YesNo};
pub use error::CaseError;
pub use level::{Language, ObesityLevel};
