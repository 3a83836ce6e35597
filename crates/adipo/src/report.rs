//! Serializable views of each command's result, shared by text and JSON output.

use adipo_case::{BmiStatus, Language, ObesityLevel, RawCase};
use adipo_model::{
    insights, ranked_feature_importances, ClassProbability, FeatureImportance, InsightKind,
    Prediction, Predictor,
};
use adipo_stats::{Dashboard, Histogram};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    pub kind: InsightKind,
    pub risk: bool,
    pub message: &'static str,
}

/// Where a case's BMI falls in the historical population.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationBmi {
    pub histogram: Histogram,
    pub case_bin: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictReport {
    pub level: ObesityLevel,
    pub label: &'static str,
    pub confidence: f64,
    pub bmi: f64,
    pub bmi_status: BmiStatus,
    /// Most likely first
    pub probabilities: Vec<ClassProbability>,
    pub feature_importances: Option<Vec<FeatureImportance>>,
    pub insights: Vec<InsightReport>,
    pub input: RawCase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_bmi: Option<PopulationBmi>,
}

impl PredictReport {
    pub fn new(
        predictor: &Predictor,
        case: RawCase,
        prediction: &Prediction,
        language: Language,
    ) -> Self {
        let bmi = case.bmi();
        Self {
            level: prediction.level,
            label: prediction.label(language),
            confidence: prediction.confidence,
            bmi,
            bmi_status: BmiStatus::from_bmi(bmi),
            probabilities: prediction.ranked(),
            feature_importances: ranked_feature_importances(predictor),
            insights: insights(&case)
                .into_iter()
                .map(|i| InsightReport {
                    kind: i.kind,
                    risk: i.risk,
                    message: i.message(language),
                })
                .collect(),
            input: case,
            population_bmi: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutReport {
    pub name: String,
    pub version: String,
    pub algorithm: String,
    pub backend: String,
    pub features: usize,
    pub classes: Vec<ObesityLevel>,
    pub accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AboutReport {
    pub fn new(predictor: &Predictor) -> Self {
        let metadata = predictor.metadata();
        let backend = predictor.classifier().backend_name().to_string();
        Self {
            name: metadata.name.clone(),
            version: metadata.version.to_string(),
            algorithm: metadata.algorithm.clone().unwrap_or_else(|| backend.clone()),
            backend,
            features: predictor.schema().len(),
            classes: predictor.labels().classes().to_vec(),
            accuracy: metadata.accuracy,
            description: metadata.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub total_records: usize,
    pub selected_records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Dashboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
