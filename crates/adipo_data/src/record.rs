use std::fmt;
use std::str::FromStr;

use adipo_case::{ObesityLevel, RawCase};
use serde::{Deserialize, Serialize};

/// Unit of the `Height` column in a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Meters,
    Centimeters,
}

impl HeightUnit {
    /// Convert a stored height to centimetres.
    pub fn to_cm(self, height: f64) -> f64 {
        match self {
            HeightUnit::Meters => height * 100.0,
            HeightUnit::Centimeters => height,
        }
    }
}

impl FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "meters" | "metres" => Ok(HeightUnit::Meters),
            "cm" | "centimeters" | "centimetres" => Ok(HeightUnit::Centimeters),
            other => Err(format!("unknown height unit '{other}'")),
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeightUnit::Meters => "meters",
            HeightUnit::Centimeters => "centimeters",
        })
    }
}

/// One labelled row of the historical dataset. Height is in centimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRecord {
    #[serde(flatten)]
    pub case: RawCase,
    #[serde(rename = "Obesity")]
    pub level: ObesityLevel,
}

impl DatasetRecord {
    pub fn bmi(&self) -> f64 {
        self.case.bmi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_units() {
        assert_eq!(HeightUnit::Meters.to_cm(1.7), 170.0);
        assert_eq!(HeightUnit::Centimeters.to_cm(170.0), 170.0);
        assert_eq!("cm".parse::<HeightUnit>(), Ok(HeightUnit::Centimeters));
        assert_eq!("Meters".parse::<HeightUnit>(), Ok(HeightUnit::Meters));
        assert!("ft".parse::<HeightUnit>().is_err());
        assert_eq!(HeightUnit::default().to_string(), "meters");
    }
}
