//! Lifestyle observations derived directly from a case's answers.

use adipo_case::{Frequency, Language, RawCase};
use serde::{Deserialize, Serialize};

/// Daily water intake (CH2O scale) below which hydration is flagged.
pub const ADEQUATE_WATER_INTAKE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    FamilyHistory,
    CaloricFood,
    Smoking,
    Alcohol,
    LowWaterIntake,
    AdequateHydration,
}

impl InsightKind {
    #[deny(unreachable_patterns)]
    pub fn message(self, language: Language) -> &'static str {
        use InsightKind::*;
        use Language::{English, Portuguese};
        match (self, language) {
            (FamilyHistory, English) => {
                "Family history of overweight: higher genetic predisposition."
            }
            (FamilyHistory, Portuguese) => {
                "Histórico familiar de sobrepeso: maior predisposição genética."
            }
            (CaloricFood, English) => {
                "Frequent high-calorie food: consider cutting empty calories."
            }
            (CaloricFood, Portuguese) => {
                "Consumo frequente de alimentos calóricos: avalie reduzir calorias vazias."
            }
            (Smoking, English) => "Smoking can affect metabolism; consider quitting.",
            (Smoking, Portuguese) => "Tabagismo pode influenciar metabolismo; considere parar.",
            (Alcohol, English) => "High alcohol consumption: moderate it to support weight control.",
            (Alcohol, Portuguese) => {
                "Alto consumo de álcool: modere para apoiar controle de peso."
            }
            (LowWaterIntake, English) => "Water intake below ideal: aim for 2-3 litres a day.",
            (LowWaterIntake, Portuguese) => {
                "Consumo de água abaixo do ideal: objetive 2-3 litros/dia."
            }
            (AdequateHydration, English) => "Adequate hydration.",
            (AdequateHydration, Portuguese) => "Hidratação adequada.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    /// Whether the observation is a risk factor rather than a positive note
    pub risk: bool,
}

impl Insight {
    fn risk(kind: InsightKind) -> Self {
        Self { kind, risk: true }
    }

    pub fn message(&self, language: Language) -> &'static str {
        self.kind.message(language)
    }
}

/// Observations for a case, in a fixed order. Always ends with a hydration note.
pub fn insights(case: &RawCase) -> Vec<Insight> {
    let mut out = Vec::new();
    if case.family_history.is_yes() {
        out.push(Insight::risk(InsightKind::FamilyHistory));
    }
    if case.favc.is_yes() {
        out.push(Insight::risk(InsightKind::CaloricFood));
    }
    if case.smoke.is_yes() {
        out.push(Insight::risk(InsightKind::Smoking));
    }
    if matches!(case.calc, Frequency::Frequently | Frequency::Always) {
        out.push(Insight::risk(InsightKind::Alcohol));
    }
    if case.ch2o < ADEQUATE_WATER_INTAKE {
        out.push(Insight::risk(InsightKind::LowWaterIntake));
    } else {
        out.push(Insight {
            kind: InsightKind::AdequateHydration,
            risk: false,
        });
    }
    out
}
