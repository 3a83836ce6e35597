use serde::{Deserialize, Serialize};

/// Body-mass index, kg / m².
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Coarse BMI band shown next to the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiStatus {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn from_bmi(value: f64) -> Self {
        if value < 18.5 {
            BmiStatus::Underweight
        } else if value < 25.0 {
            BmiStatus::Healthy
        } else if value < 30.0 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::Healthy => "Healthy weight",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obesity",
        }
    }
}
