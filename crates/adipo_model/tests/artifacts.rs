use std::fs;
use std::path::{Path, PathBuf};

use adipo_case::{Frequency, Gender, ObesityLevel, RawCase, Transport, YesNo};
use adipo_model::artifacts::{load_artifacts, load_metadata};
use adipo_model::{ArtifactError, ArtifactPaths, ModelVersion, Predictor};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn shipped_models() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models")
}

/// Copy of the shipped artifacts that a test may tamper with.
fn scratch_models() -> (TempDir, ArtifactPaths) {
    let dir = tempfile::tempdir().unwrap();
    for entry in fs::read_dir(shipped_models()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
    }
    let paths = ArtifactPaths::in_dir(dir.path());
    (dir, paths)
}

fn reference_case() -> RawCase {
    RawCase {
        gender: Gender::Male,
        age: 30.0,
        height: 170.0,
        weight: 70.0,
        family_history: YesNo::Yes,
        favc: YesNo::Yes,
        fcvc: 2.0,
        ncp: 3.0,
        caec: Frequency::Sometimes,
        smoke: YesNo::No,
        ch2o: 2.0,
        scc: YesNo::No,
        faf: 3.0,
        tue: 0.0,
        calc: Frequency::No,
        mtrans: Transport::Walking,
    }
}

#[test]
fn shipped_artifacts_load_and_predict() {
    let _ = env_logger::builder().is_test(true).try_init();
    let predictor = Predictor::load(&ArtifactPaths::in_dir(shipped_models())).unwrap();
    assert_eq!(predictor.schema().len(), 26);
    assert_eq!(predictor.labels().len(), 7);
    assert_eq!(predictor.classifier().backend_name(), "gradient_boosting");
    assert_eq!(predictor.metadata().version, ModelVersion::new(0, 1, 0));

    let prediction = predictor.predict(&reference_case()).unwrap();
    assert_eq!(prediction.level, ObesityLevel::NormalWeight);
    let sum: f64 = prediction.probabilities.iter().map(|p| p.probability).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert_eq!(prediction.ranked()[0].level, ObesityLevel::NormalWeight);
}

#[test]
fn heavier_cases_move_up_the_scale() {
    let predictor = Predictor::load(&ArtifactPaths::in_dir(shipped_models())).unwrap();
    let level_at = |weight: f64| {
        let case = RawCase {
            weight,
            ..reference_case()
        };
        predictor.predict(&case).unwrap().level
    };
    assert_eq!(level_at(45.0), ObesityLevel::InsufficientWeight);
    assert_eq!(level_at(75.0), ObesityLevel::OverweightLevelI);
    assert_eq!(level_at(85.0), ObesityLevel::OverweightLevelII);
    assert_eq!(level_at(95.0), ObesityLevel::ObesityTypeI);
    assert_eq!(level_at(110.0), ObesityLevel::ObesityTypeII);
    assert_eq!(level_at(140.0), ObesityLevel::ObesityTypeIII);
}

#[test]
fn missing_model_is_an_io_error() {
    let (dir, paths) = scratch_models();
    fs::remove_file(dir.path().join("gb_model.json")).unwrap();
    assert!(matches!(
        load_artifacts(&paths),
        Err(ArtifactError::Io { .. })
    ));
}

#[test]
fn malformed_labels_are_a_parse_error() {
    let (dir, paths) = scratch_models();
    fs::write(dir.path().join("label_encoder.json"), "[\"Normal_Weight\",").unwrap();
    let err = load_artifacts(&paths).unwrap_err();
    assert!(matches!(err, ArtifactError::Parse { .. }));
    assert!(err.to_string().contains("label_encoder.json"));
}

#[test]
fn unknown_class_name_is_rejected() {
    let (dir, paths) = scratch_models();
    fs::write(
        dir.path().join("label_encoder.json"),
        r#"["Insufficient_Weight","Normal_Weight","Obesity_Type_I","Obesity_Type_II",
            "Obesity_Type_III","Overweight_Level_I","Morbid"]"#,
    )
    .unwrap();
    assert!(matches!(
        load_artifacts(&paths),
        Err(ArtifactError::Parse { .. })
    ));
}

#[test]
fn schema_narrower_than_model_is_incompatible() {
    let (dir, paths) = scratch_models();
    let mut columns: Vec<String> =
        serde_json::from_str(&fs::read_to_string(&paths.features).unwrap()).unwrap();
    columns.pop();
    fs::write(
        dir.path().join("feature_names.json"),
        serde_json::to_string(&columns).unwrap(),
    )
    .unwrap();
    let err = load_artifacts(&paths).unwrap_err();
    assert!(matches!(err, ArtifactError::Incompatible(_)), "{err}");
}

#[test]
fn duplicate_schema_column_is_invalid() {
    let (dir, paths) = scratch_models();
    fs::write(dir.path().join("feature_names.json"), r#"["Age","Age"]"#).unwrap();
    assert!(matches!(
        load_artifacts(&paths),
        Err(ArtifactError::Invalid { .. })
    ));
}

#[test]
fn structurally_broken_model_is_invalid() {
    let (dir, paths) = scratch_models();
    fs::write(
        dir.path().join("gb_model.json"),
        r#"{"kind":"gradient_boosting","n_features":26,"n_classes":7,"learning_rate":1.0,
            "init":[0,0,0,0,0,0,0],"stages":[[{"nodes":[{"feature":40,"threshold":1,"left":1,"right":2},
            {"value":0},{"value":0}]}]]}"#,
    )
    .unwrap();
    let err = load_artifacts(&paths).unwrap_err();
    assert!(matches!(err, ArtifactError::Invalid { .. }), "{err}");
}

#[test]
fn metadata_is_optional_but_checked() {
    let (dir, paths) = scratch_models();
    let metadata_path = dir.path().join("metadata.json");

    fs::remove_file(&metadata_path).unwrap();
    let artifacts = load_artifacts(&paths).unwrap();
    assert_eq!(artifacts.metadata.version, ModelVersion::new(1, 0, 0));
    assert!(load_metadata(None).is_ok());

    fs::write(&metadata_path, r#"{"accuracy": 94.8}"#).unwrap();
    assert!(matches!(
        load_artifacts(&paths),
        Err(ArtifactError::Invalid { .. })
    ));
}
