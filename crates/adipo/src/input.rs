//! Building a `RawCase` from command-line flags and/or a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use adipo_case::{fields, CaseError, DeviceUsage, Frequency, Gender, RawCase, Transport, YesNo};
use clap::Args;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read case file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("case file {} must hold a JSON object", path.display())]
    NotAnObject { path: PathBuf },
    #[error("cannot parse case file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing case field {field}")]
    Missing { field: &'static str },
    #[error("case field {field} must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error("invalid {field} value '{value}': expected hours per day (0-2) or up-to-2h, up-to-5h, over-5h")]
    DeviceUsage { field: &'static str, value: String },
}

/// Case answers. Flags override the corresponding fields of `--case`.
#[derive(Debug, Clone, Default, Args)]
pub struct CaseArgs {
    /// JSON file with the case, keyed by dataset column names
    #[arg(long = "case", value_name = "FILE")]
    pub case_file: Option<PathBuf>,

    /// Female or Male
    #[arg(long)]
    pub gender: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<f64>,

    /// Height in centimetres
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Family history of overweight (yes/no)
    #[arg(long = "family-history", value_name = "YES_NO")]
    pub family_history: Option<String>,

    /// Frequent consumption of high-calorie food (yes/no)
    #[arg(long, value_name = "YES_NO")]
    pub favc: Option<String>,

    /// Vegetable consumption frequency (1-3)
    #[arg(long)]
    pub fcvc: Option<f64>,

    /// Number of main meals per day (1-4)
    #[arg(long)]
    pub ncp: Option<f64>,

    /// Food between meals (no, Sometimes, Frequently, Always)
    #[arg(long)]
    pub caec: Option<String>,

    /// Smoker (yes/no)
    #[arg(long, value_name = "YES_NO")]
    pub smoke: Option<String>,

    /// Daily water intake (1-3)
    #[arg(long)]
    pub ch2o: Option<f64>,

    /// Monitors calorie intake (yes/no)
    #[arg(long, value_name = "YES_NO")]
    pub scc: Option<String>,

    /// Physical activity frequency (0-7)
    #[arg(long)]
    pub faf: Option<f64>,

    /// Device usage: 0-2, or up-to-2h, up-to-5h, over-5h
    #[arg(long)]
    pub tue: Option<String>,

    /// Alcohol consumption (no, Sometimes, Frequently, Always)
    #[arg(long)]
    pub calc: Option<String>,

    /// Transport: Automobile, Motorbike, Bike, Public_Transportation, Walking
    #[arg(long)]
    pub mtrans: Option<String>,
}

fn parse_device_usage(value: &str) -> Result<f64, InputError> {
    if let Ok(hours) = value.parse::<f64>() {
        return Ok(hours);
    }
    value
        .parse::<DeviceUsage>()
        .map(DeviceUsage::code)
        .map_err(|_| InputError::DeviceUsage {
            field: fields::TUE,
            value: value.to_string(),
        })
}

/// Answers from `--case`, consulted for every field without a flag.
struct CaseFile {
    answers: Map<String, Value>,
}

impl CaseFile {
    fn read(path: Option<&Path>) -> Result<Self, InputError> {
        let Some(path) = path else {
            return Ok(Self {
                answers: Map::new(),
            });
        };
        let text = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&text).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(answers) => Ok(Self { answers }),
            _ => Err(InputError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    fn text<'a>(
        &'a self,
        field: &'static str,
        flag: &'a Option<String>,
    ) -> Result<&'a str, InputError> {
        if let Some(value) = flag {
            return Ok(value);
        }
        match self.answers.get(field) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(InputError::WrongType {
                field,
                expected: "string",
            }),
            None => Err(InputError::Missing { field }),
        }
    }

    fn category<T>(
        &self,
        field: &'static str,
        flag: &Option<String>,
        parse: impl Fn(&'static str, &str) -> Result<T, CaseError>,
    ) -> Result<T, InputError> {
        Ok(parse(field, self.text(field, flag)?)?)
    }

    fn number(&self, field: &'static str, flag: Option<f64>) -> Result<f64, InputError> {
        if let Some(value) = flag {
            return Ok(value);
        }
        let not_a_number = InputError::WrongType {
            field,
            expected: "number",
        };
        match self.answers.get(field) {
            Some(Value::Number(value)) => value.as_f64().ok_or(not_a_number),
            Some(_) => Err(not_a_number),
            None => Err(InputError::Missing { field }),
        }
    }

    fn device_usage(&self, flag: Option<&str>) -> Result<f64, InputError> {
        if let Some(value) = flag {
            return parse_device_usage(value);
        }
        match self.answers.get(fields::TUE) {
            Some(Value::String(value)) => parse_device_usage(value),
            _ => self.number(fields::TUE, None),
        }
    }
}

impl CaseArgs {
    /// Merge the file (if any) with the flags. Domain checks happen at encoding.
    pub fn to_case(&self) -> Result<RawCase, InputError> {
        let file = CaseFile::read(self.case_file.as_deref())?;
        Ok(RawCase {
            gender: file.category(fields::GENDER, &self.gender, Gender::parse_for)?,
            age: file.number(fields::AGE, self.age)?,
            height: file.number(fields::HEIGHT, self.height)?,
            weight: file.number(fields::WEIGHT, self.weight)?,
            family_history: file.category(
                fields::FAMILY_HISTORY,
                &self.family_history,
                YesNo::parse_for,
            )?,
            favc: file.category(fields::FAVC, &self.favc, YesNo::parse_for)?,
            fcvc: file.number(fields::FCVC, self.fcvc)?,
            ncp: file.number(fields::NCP, self.ncp)?,
            caec: file.category(fields::CAEC, &self.caec, Frequency::parse_for)?,
            smoke: file.category(fields::SMOKE, &self.smoke, YesNo::parse_for)?,
            ch2o: file.number(fields::CH2O, self.ch2o)?,
            scc: file.category(fields::SCC, &self.scc, YesNo::parse_for)?,
            faf: file.number(fields::FAF, self.faf)?,
            tue: file.device_usage(self.tue.as_deref())?,
            calc: file.category(fields::CALC, &self.calc, Frequency::parse_for)?,
            mtrans: file.category(fields::MTRANS, &self.mtrans, Transport::parse_for)?,
        })
    }
}
