//! Shared fixtures for the cross-crate tests.

use std::path::{Path, PathBuf};

use adipo_case::{Frequency, Gender, RawCase, Transport, YesNo};
use adipo_data::{load_dataset, DatasetRecord, HeightUnit};
use adipo_model::{ArtifactPaths, Predictor};

pub fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}

pub fn shipped_predictor() -> Predictor {
    Predictor::load(&ArtifactPaths::in_dir(repo_root().join("models")))
        .expect("shipped artifacts load")
}

pub fn shipped_dataset() -> Vec<DatasetRecord> {
    load_dataset(&repo_root().join("data/Obesity.csv"), HeightUnit::Meters)
        .expect("shipped dataset loads")
}

/// The worked example: a 30-year-old man, 170 cm, 70 kg.
pub fn worked_example() -> RawCase {
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
