use adipo_case::{fields, RawCase};
use log::debug;

use crate::error::EncodeError;
use crate::schema::FeatureSchema;
use crate::vector::FeatureVector;

/// Multi-valued fields expanded into indicator columns.
pub const ONE_HOT_FIELDS: [&str; 3] = [fields::CAEC, fields::CALC, fields::MTRANS];

/// Indicator column name for `field == value`.
pub fn one_hot_name(field: &str, value: &str) -> String {
    format!("{field}_{value}")
}

/// Columns produced for a single case before schema alignment.
///
/// Numeric answers come first (height already in metres), then the binary
/// answers, then one indicator per multi-valued field for the case's own
/// value. Indicators for values the case does not have are not produced;
/// they only appear after projection onto a schema.
pub fn expanded_columns(case: &RawCase) -> Vec<(String, f64)> {
    let mut out = Vec::with_capacity(16);

    for (name, value) in case.numeric_fields() {
        let value = if name == fields::HEIGHT {
            value / 100.0
        } else {
            value
        };
        out.push((name.to_string(), value));
    }

    out.push((fields::GENDER.to_string(), case.gender.code()));
    for (name, answer) in [
        (fields::FAMILY_HISTORY, case.family_history),
        (fields::FAVC, case.favc),
        (fields::SMOKE, case.smoke),
        (fields::SCC, case.scc),
    ] {
        out.push((name.to_string(), answer.code()));
    }

    for (field, value) in ONE_HOT_FIELDS.into_iter().zip([
        case.caec.as_str(),
        case.calc.as_str(),
        case.mtrans.as_str(),
    ]) {
        out.push((one_hot_name(field, value), 1.0));
    }

    out
}

/// Encode `case` into a vector with exactly the columns of `schema`, in
/// schema order.
///
/// The case is validated first, so out-of-domain answers are rejected
/// rather than encoded.
pub fn encode(case: &RawCase, schema: &FeatureSchema) -> Result<FeatureVector, EncodeError> {
    case.validate()?;

    let mut values = vec![0.0; schema.len()];
    let mut filled = vec![false; schema.len()];

    for (name, value) in expanded_columns(case) {
        match schema.position(&name) {
            Some(i) => {
                values[i] = value;
                filled[i] = true;
            }
            None => debug!("dropping column '{name}': not in schema"),
        }
    }

    let zero_filled: Vec<&str> = schema
        .columns()
        .iter()
        .zip(&filled)
        .filter(|(_, hit)| !**hit)
        .map(|(name, _)| name.as_str())
        .collect();
    debug!(
        "encoded case into {} features ({} zero-filled: {:?})",
        values.len(),
        zero_filled.len(),
        zero_filled
    );

    let vector = FeatureVector::new(schema.shared_columns(), values);
    schema.check(&vector)?;
    Ok(vector)
}
