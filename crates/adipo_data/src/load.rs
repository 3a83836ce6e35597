//! CSV loading of the historical dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use adipo_case::{fields, CaseError, Frequency, Gender, ObesityLevel, RawCase, Transport, YesNo};
use log::{debug, info};
use serde::Deserialize;

use crate::error::DataError;
use crate::record::{DatasetRecord, HeightUnit};

/// Row layout of the dataset file.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Age")]
    age: f64,
    #[serde(rename = "Height")]
    height: f64,
    #[serde(rename = "Weight")]
    weight: f64,
    #[serde(alias = "family_history_with_overweight")]
    family_history: String,
    #[serde(rename = "FAVC")]
    favc: String,
    #[serde(rename = "FCVC")]
    fcvc: f64,
    #[serde(rename = "NCP")]
    ncp: f64,
    #[serde(rename = "CAEC")]
    caec: String,
    #[serde(rename = "SMOKE")]
    smoke: String,
    #[serde(rename = "CH2O")]
    ch2o: f64,
    #[serde(rename = "SCC")]
    scc: String,
    #[serde(rename = "FAF")]
    faf: f64,
    #[serde(rename = "TUE")]
    tue: f64,
    #[serde(rename = "CALC")]
    calc: String,
    #[serde(rename = "MTRANS")]
    mtrans: String,
    #[serde(rename = "Obesity", alias = "NObeyesdad")]
    obesity: ObesityLevel,
}

impl CsvRow {
    /// Categorical answers are parsed against their own column name.
    fn into_record(self, unit: HeightUnit) -> Result<DatasetRecord, CaseError> {
        Ok(DatasetRecord {
            case: RawCase {
                gender: Gender::parse_for(fields::GENDER, &self.gender)?,
                age: self.age,
                height: unit.to_cm(self.height),
                weight: self.weight,
                family_history: YesNo::parse_for(fields::FAMILY_HISTORY, &self.family_history)?,
                favc: YesNo::parse_for(fields::FAVC, &self.favc)?,
                fcvc: self.fcvc,
                ncp: self.ncp,
                caec: Frequency::parse_for(fields::CAEC, &self.caec)?,
                smoke: YesNo::parse_for(fields::SMOKE, &self.smoke)?,
                ch2o: self.ch2o,
                scc: YesNo::parse_for(fields::SCC, &self.scc)?,
                faf: self.faf,
                tue: self.tue,
                calc: Frequency::parse_for(fields::CALC, &self.calc)?,
                mtrans: Transport::parse_for(fields::MTRANS, &self.mtrans)?,
            },
            level: self.obesity,
        })
    }
}

/// Parse dataset rows from any reader. The first line must be a header.
///
/// Every row is validated like an operator-entered case; the first bad row
/// aborts loading with its 1-based line number.
pub fn load_dataset_from_reader<R: Read>(
    reader: R,
    unit: HeightUnit,
) -> Result<Vec<DatasetRecord>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|source| DataError::Csv { line: 1, source })?
        .clone();

    let mut records = Vec::new();
    let mut last_line = 1;
    for row in rdr.records() {
        let row = row.map_err(|source| DataError::Csv {
            line: source.position().map_or(last_line + 1, |p| p.line()),
            source,
        })?;
        // File line, counting skipped blank lines.
        let line = row.position().map_or(last_line + 1, |p| p.line());
        last_line = line;
        let record = row
            .deserialize::<CsvRow>(Some(&headers))
            .map_err(|source| DataError::Csv { line, source })?
            .into_record(unit)
            .map_err(|source| DataError::Case { line, source })?;
        record
            .case
            .validate()
            .map_err(|source| DataError::Case { line, source })?;
        records.push(record);
    }
    debug!("parsed {} dataset rows", records.len());
    Ok(records)
}

/// Load the dataset file at `path`.
pub fn load_dataset(path: &Path, unit: HeightUnit) -> Result<Vec<DatasetRecord>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_dataset_from_reader(file, unit)?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
