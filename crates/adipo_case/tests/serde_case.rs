use adipo_case::{CaseError, Frequency, Gender, ObesityLevel, RawCase, Transport, YesNo};
use pretty_assertions::assert_eq;

const CASE_JSON: &str = r#"{
    "Gender": "Male",
    "Age": 30,
    "Height": 170,
    "Weight": 70,
    "family_history": "yes",
    "FAVC": "yes",
    "FCVC": 2,
    "NCP": 3,
    "CAEC": "Sometimes",
    "CH2O": 2,
    "SMOKE": "no",
    "SCC": "no",
    "FAF": 3,
    "TUE": 0,
    "CALC": "no",
    "MTRANS": "Walking"
}"#;

#[test]
fn case_reads_dataset_column_names() {
    let case: RawCase = serde_json::from_str(CASE_JSON).expect("parse case");
    assert_eq!(case.gender, Gender::Male);
    assert_eq!(case.height, 170.0);
    assert_eq!(case.family_history, YesNo::Yes);
    assert_eq!(case.caec, Frequency::Sometimes);
    assert_eq!(case.mtrans, Transport::Walking);
    assert!(case.validate().is_ok());
}

#[test]
fn case_serializes_with_literals() {
    let case: RawCase = serde_json::from_str(CASE_JSON).unwrap();
    let value = serde_json::to_value(&case).unwrap();
    assert_eq!(value["MTRANS"], "Walking");
    assert_eq!(value["CAEC"], "Sometimes");
    assert_eq!(value["family_history"], "yes");
}

#[test]
fn unknown_category_in_json_is_rejected() {
    let bad = CASE_JSON.replace("\"Walking\"", "\"Scooter\"");
    let err = serde_json::from_str::<RawCase>(&bad).unwrap_err();
    assert!(err.to_string().contains("Scooter"), "{err}");
}

#[test]
fn obesity_level_parses_from_canonical_name() {
    let level: ObesityLevel = serde_json::from_str("\"Overweight_Level_II\"").unwrap();
    assert_eq!(level, ObesityLevel::OverweightLevelII);
    assert!(matches!(
        "overweight".parse::<ObesityLevel>(),
        Err(CaseError::UnknownCategoryValue { field: "Obesity", .. })
    ));
}

#[test]
fn bmi_uses_centimetre_height() {
    let case: RawCase = serde_json::from_str(CASE_JSON).unwrap();
    assert!((case.height_m() - 1.70).abs() < 1e-12);
    assert!((case.bmi() - 70.0 / (1.7 * 1.7)).abs() < 1e-9);
}
