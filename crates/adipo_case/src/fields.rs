//! Column names of the raw (pre-encoding) dataset schema.

pub const GENDER: &str = "Gender";
pub const AGE: &str = "Age";
pub const HEIGHT: &str = "Height";
pub const WEIGHT: &str = "Weight";
pub const FAMILY_HISTORY: &str = "family_history";
pub const FAVC: &str = "FAVC";
pub const FCVC: &str = "FCVC";
pub const NCP: &str = "NCP";
pub const CAEC: &str = "CAEC";
pub const SMOKE: &str = "SMOKE";
pub const CH2O: &str = "CH2O";
pub const SCC: &str = "SCC";
pub const FAF: &str = "FAF";
pub const TUE: &str = "TUE";
pub const CALC: &str = "CALC";
pub const MTRANS: &str = "MTRANS";

/// Target column of the historical dataset.
pub const OBESITY: &str = "Obesity";
