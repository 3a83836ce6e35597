//! Human-readable text output.

use std::io::{self, Write};

use adipo_case::Language;
use adipo_encoder::FeatureVector;
use adipo_stats::{bar_chart_ascii, histogram_ascii, CrossTab, Dashboard, LevelMean};

use crate::report::{AboutReport, DashboardReport, PredictReport};

const BAR_WIDTH: usize = 40;
const TOP_FEATURES: usize = 10;

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}\n{}", "-".repeat(title.chars().count()))
}

fn indent(out: &mut impl Write, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

pub fn predict(
    out: &mut impl Write,
    report: &PredictReport,
    language: Language,
) -> io::Result<()> {
    writeln!(out, "Predicted level: {} ({})", report.label, report.level)?;
    writeln!(out, "Confidence:      {:.1}%", report.confidence * 100.0)?;
    writeln!(
        out,
        "BMI:             {:.1} ({})",
        report.bmi,
        report.bmi_status.label()
    )?;

    heading(out, "Probabilities")?;
    let labels: Vec<&str> = report
        .probabilities
        .iter()
        .map(|p| p.level.label(language))
        .collect();
    let values: Vec<f64> = report
        .probabilities
        .iter()
        .map(|p| p.probability * 100.0)
        .collect();
    indent(out, bar_chart_ascii(&labels, &values, BAR_WIDTH))?;

    if let Some(population) = &report.population_bmi {
        heading(out, "Population BMI (< marks this case)")?;
        indent(
            out,
            histogram_ascii(&population.histogram, BAR_WIDTH, population.case_bin),
        )?;
    }

    if let Some(importances) = &report.feature_importances {
        heading(out, "Feature importances")?;
        let top: Vec<_> = importances.iter().take(TOP_FEATURES).collect();
        let labels: Vec<&str> = top.iter().map(|f| f.column.as_str()).collect();
        let values: Vec<f64> = top.iter().map(|f| f.importance).collect();
        indent(out, bar_chart_ascii(&labels, &values, BAR_WIDTH))?;
    }

    heading(out, "Insights")?;
    for insight in &report.insights {
        writeln!(out, "  - {}", insight.message)?;
    }

    heading(out, "Input summary")?;
    let rows = report.input.summary_rows();
    let pad = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in rows {
        writeln!(out, "  {key:<pad$}  {value}")?;
    }
    Ok(())
}

pub fn vector(out: &mut impl Write, vector: &FeatureVector) -> io::Result<()> {
    let pad = vector.columns().iter().map(String::len).max().unwrap_or(0);
    for (name, value) in vector.iter() {
        writeln!(out, "{name:<pad$}  {value}")?;
    }
    Ok(())
}

pub fn about(out: &mut impl Write, report: &AboutReport) -> io::Result<()> {
    writeln!(out, "Model:      {} {}", report.name, report.version)?;
    writeln!(out, "Algorithm:  {}", report.algorithm)?;
    writeln!(out, "Backend:    {}", report.backend)?;
    writeln!(out, "Features:   {}", report.features)?;
    writeln!(out, "Classes:    {}", report.classes.len())?;
    match report.accuracy {
        Some(accuracy) => writeln!(out, "Accuracy:   {:.1}%", accuracy * 100.0)?,
        None => writeln!(out, "Accuracy:   not reported")?,
    }
    if let Some(description) = &report.description {
        writeln!(out, "\n{description}")?;
    }
    Ok(())
}

fn crosstab(out: &mut impl Write, table: &CrossTab, language: Language) -> io::Result<()> {
    let pad = table
        .rows
        .iter()
        .map(|r| r.level.label(language).chars().count())
        .max()
        .unwrap_or(0);
    let header: String = table.columns.iter().map(|c| format!("{c:>8}")).collect();
    writeln!(out, "  {:pad$}{header}", "")?;
    for row in &table.rows {
        let counts: String = row.counts.iter().map(|c| format!("{c:>8}")).collect();
        let label = row.level.label(language);
        let fill = pad - label.chars().count();
        writeln!(out, "  {label}{}{counts}", " ".repeat(fill))?;
    }
    Ok(())
}

fn level_means(out: &mut impl Write, means: &[LevelMean], language: Language) -> io::Result<()> {
    let labels: Vec<&str> = means.iter().map(|m| m.level.label(language)).collect();
    let values: Vec<f64> = means.iter().map(|m| m.mean).collect();
    indent(out, bar_chart_ascii(&labels, &values, BAR_WIDTH))
}

fn dashboard_body(
    out: &mut impl Write,
    dashboard: &Dashboard,
    language: Language,
) -> io::Result<()> {
    let o = &dashboard.overview;
    heading(out, "Overview")?;
    writeln!(out, "  Records:          {}", o.records)?;
    writeln!(out, "  Mean weight (kg): {:.1}", o.mean_weight_kg)?;
    writeln!(out, "  Mean height (m):  {:.2}", o.mean_height_m)?;

    heading(out, "Obesity level distribution (%)")?;
    let labels: Vec<&str> = dashboard
        .distribution
        .iter()
        .map(|s| s.level.label(language))
        .collect();
    let values: Vec<f64> = dashboard.distribution.iter().map(|s| s.percent).collect();
    indent(out, bar_chart_ascii(&labels, &values, BAR_WIDTH))?;

    heading(out, "Obesity level by gender")?;
    crosstab(out, &dashboard.by_gender, language)?;

    heading(out, "Obesity level by family history")?;
    crosstab(out, &dashboard.by_family_history, language)?;

    heading(out, "Weight by obesity level (kg)")?;
    let pad = dashboard
        .weight_by_level
        .iter()
        .map(|b| b.level.label(language).chars().count())
        .max()
        .unwrap_or(0);
    writeln!(
        out,
        "  {:pad$}  {:>4} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "", "n", "min", "q1", "median", "q3", "max"
    )?;
    for b in &dashboard.weight_by_level {
        let label = b.level.label(language);
        let fill = pad - label.chars().count();
        writeln!(
            out,
            "  {label}{}  {:>4} {:>7.1} {:>7.1} {:>7.1} {:>7.1} {:>7.1}",
            " ".repeat(fill),
            b.count,
            b.min,
            b.q1,
            b.median,
            b.q3,
            b.max
        )?;
    }

    heading(out, "Mean physical activity (FAF) by level")?;
    level_means(out, &dashboard.activity_by_level, language)?;

    heading(out, "Mean main meals (NCP) by level")?;
    level_means(out, &dashboard.meals_by_level, language)?;

    heading(out, "BMI distribution")?;
    indent(out, histogram_ascii(&dashboard.bmi, BAR_WIDTH, None))?;

    heading(out, "Correlations")?;
    let m = &dashboard.correlations;
    let header: String = m.columns.iter().map(|c| format!("{c:>8}")).collect();
    writeln!(out, "  {:8}{header}", "")?;
    for (name, row) in m.columns.iter().zip(&m.values) {
        let cells: String = row.iter().map(|r| format!("{r:>8.2}")).collect();
        writeln!(out, "  {name:<8}{cells}")?;
    }
    Ok(())
}

pub fn dashboard(
    out: &mut impl Write,
    report: &DashboardReport,
    language: Language,
) -> io::Result<()> {
    writeln!(
        out,
        "Selected {} of {} records",
        report.selected_records, report.total_records
    )?;
    if let Some(notice) = &report.notice {
        writeln!(out, "{notice}")?;
    }
    if let Some(dashboard) = &report.dashboard {
        dashboard_body(out, dashboard, language)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adipo_case::ObesityLevel;
    use adipo_encoder::FeatureSchema;

    /// Accepts a fixed number of bytes, then fails like a closed pipe.
    struct Truncated {
        room: usize,
    }

    impl Write for Truncated {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn about_report() -> AboutReport {
        AboutReport {
            name: "obesity-level-classifier".into(),
            version: "0.1.0".into(),
            algorithm: "Gradient Boosting".into(),
            backend: "gradient_boosting".into(),
            features: 26,
            classes: ObesityLevel::ALL.to_vec(),
            accuracy: None,
            description: None,
        }
    }

    #[test]
    fn about_lists_model_facts() {
        let mut out = Vec::new();
        about(&mut out, &about_report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Features:   26"), "{text}");
        assert!(text.contains("Classes:    7"));
        assert!(text.contains("Accuracy:   not reported"));
    }

    #[test]
    fn write_failures_are_reported() {
        let mut out = Truncated { room: 10 };
        let err = about(&mut out, &about_report()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn vector_keeps_schema_order() {
        let schema = FeatureSchema::from_names(["Weight", "Age"]).unwrap();
        let v = FeatureVector::from_schema(&schema, vec![70.0, 30.0]).unwrap();
        let mut out = Vec::new();
        vector(&mut out, &v).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Weight  70\nAge     30\n");
    }

    #[test]
    fn empty_selection_prints_the_notice() {
        let report = DashboardReport {
            total_records: 84,
            selected_records: 0,
            dashboard: None,
            notice: Some("no records match the selected filters".into()),
        };
        let mut out = Vec::new();
        dashboard(&mut out, &report, Language::English).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Selected 0 of 84 records\nno records match the selected filters\n"
        );
    }
}
