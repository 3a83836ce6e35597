//! Feature encoding for the obesity-level classifier.
//!
//! [`encode`] turns one [`RawCase`](adipo_case::RawCase) into the numeric
//! vector the classifier was trained on. The set and order of output columns
//! is owned by a [`FeatureSchema`] persisted at training time, never by the
//! data being encoded:
//!
//! 1. height is converted from centimetres to metres;
//! 2. two-valued answers become 0/1;
//! 3. CAEC, CALC and MTRANS become `<field>_<value>` indicators for the
//!    row's own value;
//! 4. the result is projected onto the schema: missing columns are filled
//!    with 0, unknown ones are dropped, and the schema order is applied.
//!
//! ```
//! use adipo_case::{Frequency, Gender, RawCase, Transport, YesNo};
//! use adipo_encoder::{encode, FeatureSchema};
//!
//! let schema = FeatureSchema::from_names(["Height", "Gender", "MTRANS_Bike", "MTRANS_Walking"]).unwrap();
//! let case = RawCase {
//!     gender: Gender::Male, age: 30.0, height: 170.0, weight: 70.0,
//!     family_history: YesNo::Yes, favc: YesNo::Yes, fcvc: 2.0, ncp: 3.0,
//!     caec: Frequency::Sometimes, smoke: YesNo::No, ch2o: 2.0, scc: YesNo::No,
//!     faf: 3.0, tue: 0.0, calc: Frequency::No, mtrans: Transport::Walking,
//! };
//! let x = encode(&case, &schema).unwrap();
//! assert_eq!(x.values(), &[1.70, 1.0, 0.0, 1.0]);
//! ```
mod encode;
mod error;
mod schema;
mod vector;

pub use encode::{encode, expanded_columns, one_hot_name, ONE_HOT_FIELDS};
pub use error::EncodeError;
pub use schema::FeatureSchema;
pub use vector::FeatureVector;
