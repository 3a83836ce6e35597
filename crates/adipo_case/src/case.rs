use serde::{Deserialize, Serialize};

use crate::bmi::bmi;
use crate::category::{Frequency, Gender, Transport, YesNo};
use crate::error::CaseError;
use crate::fields;

/// One subject's answers, as entered by an operator or read from the dataset.
///
/// `height` is in centimetres. Ordinal answers (FCVC, NCP, CH2O, FAF, TUE)
/// are kept as `f64` because later dataset revisions store them as
/// continuous values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCase {
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "Weight")]
    pub weight: f64,
    pub family_history: YesNo,
    #[serde(rename = "FAVC")]
    pub favc: YesNo,
    #[serde(rename = "FCVC")]
    pub fcvc: f64,
    #[serde(rename = "NCP")]
    pub ncp: f64,
    #[serde(rename = "CAEC")]
    pub caec: Frequency,
    #[serde(rename = "SMOKE")]
    pub smoke: YesNo,
    #[serde(rename = "CH2O")]
    pub ch2o: f64,
    #[serde(rename = "SCC")]
    pub scc: YesNo,
    #[serde(rename = "FAF")]
    pub faf: f64,
    #[serde(rename = "TUE")]
    pub tue: f64,
    #[serde(rename = "CALC")]
    pub calc: Frequency,
    #[serde(rename = "MTRANS")]
    pub mtrans: Transport,
}

/// Inclusive domains of the ordinal answers.
const ORDINAL_RANGES: [(&str, f64, f64); 5] = [
    (fields::FCVC, 1.0, 3.0),
    (fields::NCP, 1.0, 4.0),
    (fields::CH2O, 1.0, 3.0),
    (fields::FAF, 0.0, 7.0),
    (fields::TUE, 0.0, 2.0),
];

impl RawCase {
    /// Check that every numeric answer is finite and inside its domain.
    pub fn validate(&self) -> Result<(), CaseError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(CaseError::NonFinite { field });
            }
        }
        for (field, value) in [
            (fields::AGE, self.age),
            (fields::HEIGHT, self.height),
            (fields::WEIGHT, self.weight),
        ] {
            if value <= 0.0 {
                return Err(CaseError::NotPositive { field, value });
            }
        }
        let ordinals = [self.fcvc, self.ncp, self.ch2o, self.faf, self.tue];
        for (&(field, min, max), value) in ORDINAL_RANGES.iter().zip(ordinals) {
            if value < min || value > max {
                return Err(CaseError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Numeric answers in raw units, keyed by their dataset column name.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 8] {
        [
            (fields::AGE, self.age),
            (fields::HEIGHT, self.height),
            (fields::WEIGHT, self.weight),
            (fields::FCVC, self.fcvc),
            (fields::NCP, self.ncp),
            (fields::CH2O, self.ch2o),
            (fields::FAF, self.faf),
            (fields::TUE, self.tue),
        ]
    }

    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        self.height / 100.0
    }

    /// Body-mass index from the centimetre height.
    pub fn bmi(&self) -> f64 {
        bmi(self.weight, self.height_m())
    }

    /// Display rows for the "input summary" table, in intake-form order.
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Gender", self.gender.to_string()),
            ("Age", format_number(self.age)),
            ("Height (cm)", format_number(self.height)),
            ("Weight (kg)", format_number(self.weight)),
            ("Family history of overweight", self.family_history.to_string()),
            ("Frequent high-calorie food", self.favc.to_string()),
            ("Main meals per day", format_number(self.ncp)),
            ("Vegetable frequency", format_number(self.fcvc)),
            ("Food between meals", self.caec.to_string()),
            ("Daily water intake", format_number(self.ch2o)),
            ("Smoker", self.smoke.to_string()),
            ("Monitors calories", self.scc.to_string()),
            ("Physical activity per week", format_number(self.faf)),
            ("Device usage", format_number(self.tue)),
            ("Alcohol frequency", self.calc.to_string()),
            ("Transport", self.mtrans.to_string()),
        ]
    }
}

fn format_number(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x:.2}")
    }
}
