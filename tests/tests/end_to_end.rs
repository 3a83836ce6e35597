use std::sync::Arc;
use std::thread;

use adipo_case::{Gender, Language, ObesityLevel};
use adipo_data::CaseFilter;
use adipo_encoder::{encode, EncodeError, FeatureSchema};
use adipo_model::{insights, InsightKind, PredictError};
use adipo_stats::{class_distribution, summarize};
use pretty_assertions::assert_eq;
use tests::{shipped_dataset, shipped_predictor, worked_example};

#[test]
fn worked_example_through_the_shipped_model() {
    let predictor = shipped_predictor();
    let case = worked_example();

    let vector = predictor.encode(&case).unwrap();
    assert_eq!(vector.len(), predictor.schema().len());
    assert!((vector.get("Height").unwrap() - 1.70).abs() < 1e-12);
    assert_eq!(vector.get("Gender"), Some(1.0));

    let prediction = predictor.predict(&case).unwrap();
    assert_eq!(prediction.level, ObesityLevel::NormalWeight);
    assert_eq!(prediction.label(Language::English), "Normal weight");
    assert_eq!(prediction.label(Language::Portuguese), "Peso Normal");
    let ranked = prediction.ranked();
    assert_eq!(ranked[0].level, prediction.level);
    assert_eq!(ranked[0].probability, prediction.confidence);
}

#[test]
fn worked_example_width_is_schema_independent() {
    let case = worked_example();
    for names in [
        vec!["Height", "Gender"],
        vec!["Gender", "Age", "Height", "Weight", "MTRANS_Bike", "MTRANS_Walking"],
    ] {
        let schema = FeatureSchema::from_names(names.iter().copied()).unwrap();
        let vector = encode(&case, &schema).unwrap();
        assert_eq!(vector.len(), names.len());
        assert!((vector.get("Height").unwrap() - 1.70).abs() < 1e-12);
        assert_eq!(vector.get("Gender"), Some(1.0));
    }
}

#[test]
fn every_dataset_record_gets_a_valid_prediction() {
    let predictor = shipped_predictor();
    for record in shipped_dataset() {
        let prediction = predictor.predict(&record.case).unwrap();
        let total: f64 = prediction.probabilities.iter().map(|p| p.probability).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(prediction.probabilities.iter().all(|p| p.probability >= 0.0));
        assert_eq!(
            prediction.probability_of(prediction.level),
            Some(prediction.confidence)
        );
    }
}

#[test]
fn predictor_is_shared_across_threads() {
    let predictor = Arc::new(shipped_predictor());
    let records = Arc::new(shipped_dataset());
    let expected: Vec<ObesityLevel> = records
        .iter()
        .map(|r| predictor.predict(&r.case).unwrap().level)
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let predictor = Arc::clone(&predictor);
            let records = Arc::clone(&records);
            thread::spawn(move || {
                records
                    .iter()
                    .map(|r| predictor.predict(&r.case).unwrap().level)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn vector_from_another_schema_is_rejected() {
    let predictor = shipped_predictor();
    let narrow = FeatureSchema::from_names(["Gender", "Height"]).unwrap();
    let vector = encode(&worked_example(), &narrow).unwrap();
    match predictor.predict_encoded(&vector) {
        Err(PredictError::Encode(EncodeError::SchemaMismatch { .. })) => {}
        other => panic!("expected a schema mismatch, got {other:?}"),
    }
}

#[test]
fn out_of_domain_case_is_rejected_before_classification() {
    let predictor = shipped_predictor();
    let mut case = worked_example();
    case.fcvc = 4.0;
    assert!(matches!(
        predictor.predict(&case),
        Err(PredictError::Encode(EncodeError::Case(_)))
    ));
}

#[test]
fn insights_follow_the_worked_example() {
    let kinds: Vec<InsightKind> = insights(&worked_example())
        .into_iter()
        .map(|i| i.kind)
        .collect();
    assert!(kinds.contains(&InsightKind::FamilyHistory));
    assert!(kinds.contains(&InsightKind::CaloricFood));
    assert!(kinds.contains(&InsightKind::AdequateHydration));
    assert!(!kinds.contains(&InsightKind::Smoking));
}

#[test]
fn filtered_dashboard_counts_match_the_selection() {
    let records = shipped_dataset();
    let filter = CaseFilter::new().genders([Gender::Female]).age_between(18.0, 40.0);
    let rows = filter.apply(&records);
    assert!(!rows.is_empty());
    assert!(rows.len() < records.len());

    let dashboard = summarize(&rows, 10).unwrap();
    assert_eq!(dashboard.overview.records, rows.len());
    let counted: usize = dashboard.distribution.iter().map(|s| s.count).sum();
    assert_eq!(counted, rows.len());
    assert_eq!(dashboard.bmi.total(), rows.len());
}

#[test]
fn whole_dataset_covers_every_level() {
    let records = shipped_dataset();
    let rows: Vec<_> = records.iter().collect();
    let shares = class_distribution(&rows).unwrap();
    let levels: Vec<ObesityLevel> = shares.iter().map(|s| s.level).collect();
    assert_eq!(levels, ObesityLevel::ALL);
}

#[test]
fn predictions_on_filtered_rows_keep_label_bijection() {
    let predictor = shipped_predictor();
    let records = shipped_dataset();
    for row in CaseFilter::new().genders([Gender::Male]).apply(&records) {
        let prediction = predictor.predict(&row.case).unwrap();
        let index = predictor.labels().encode(prediction.level);
        assert_eq!(index, Some(prediction.class_index));
    }
}
