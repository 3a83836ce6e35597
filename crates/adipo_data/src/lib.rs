//! Historical obesity dataset: CSV loading and row selection.
//!
//! ```
//! use adipo_data::{load_dataset_from_reader, CaseFilter, HeightUnit};
//! use adipo_case::Gender;
//!
//! let csv = "Gender,Age,Height,Weight,family_history,FAVC,FCVC,NCP,CAEC,SMOKE,CH2O,SCC,FAF,TUE,CALC,MTRANS,Obesity\n\
//!            Female,21,1.62,64,yes,no,2,3,Sometimes,no,2,no,0,1,no,Public_Transportation,Normal_Weight\n";
//! let records = load_dataset_from_reader(csv.as_bytes(), HeightUnit::Meters).unwrap();
//! assert_eq!(records[0].case.height, 162.0);
//!
//! let women = CaseFilter::new().genders([Gender::Female]).apply(&records);
//! assert_eq!(women.len(), 1);
//! ```
pub mod error;
pub mod filter;
pub mod load;
pub mod record;

pub use error::DataError;
pub use filter::CaseFilter;
pub use load::{load_dataset, load_dataset_from_reader};
pub use record::{DatasetRecord, HeightUnit};
