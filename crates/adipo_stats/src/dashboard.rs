//! Aggregations behind the analytical dashboard.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use adipo_case::{fields, ObesityLevel, RawCase};
use adipo_data::DatasetRecord;
use log::debug;
use serde::Serialize;

use crate::basic::{mean, pearson, quantile};
use crate::error::StatsError;

type Rows<'a> = [&'a DatasetRecord];

fn non_empty(rows: &Rows<'_>) -> Result<(), StatsError> {
    if rows.is_empty() {
        Err(StatsError::EmptySelection)
    } else {
        Ok(())
    }
}

/// Values of `value` per level, levels in severity order.
fn group_by_level(
    rows: &Rows<'_>,
    value: impl Fn(&RawCase) -> f64,
) -> BTreeMap<ObesityLevel, Vec<f64>> {
    let mut groups: BTreeMap<ObesityLevel, Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.level).or_default().push(value(&row.case));
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub records: usize,
    pub mean_weight_kg: f64,
    pub mean_height_m: f64,
}

pub fn overview(rows: &Rows<'_>) -> Result<Overview, StatsError> {
    non_empty(rows)?;
    let weights: Vec<f64> = rows.iter().map(|r| r.case.weight).collect();
    let heights: Vec<f64> = rows.iter().map(|r| r.case.height_m()).collect();
    Ok(Overview {
        records: rows.len(),
        mean_weight_kg: mean(&weights),
        mean_height_m: mean(&heights),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelShare {
    pub level: ObesityLevel,
    pub count: usize,
    pub percent: f64,
}

/// Share of each level among the rows; levels with no rows are omitted.
pub fn class_distribution(rows: &Rows<'_>) -> Result<Vec<LevelShare>, StatsError> {
    non_empty(rows)?;
    let mut counts: BTreeMap<ObesityLevel, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.level).or_default() += 1;
    }
    let total = rows.len() as f64;
    Ok(counts
        .into_iter()
        .map(|(level, count)| LevelShare {
            level,
            count,
            percent: 100.0 * count as f64 / total,
        })
        .collect())
}

/// Counts per (level, category) pair. Only observed levels and categories appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTab {
    pub columns: Vec<String>,
    pub rows: Vec<CrossTabRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTabRow {
    pub level: ObesityLevel,
    pub counts: Vec<usize>,
}

impl CrossTab {
    fn build<C: Ord + Copy + fmt::Display>(
        rows: &Rows<'_>,
        category: impl Fn(&RawCase) -> C,
    ) -> Result<Self, StatsError> {
        non_empty(rows)?;
        let categories: BTreeSet<C> = rows.iter().map(|r| category(&r.case)).collect();
        let categories: Vec<C> = categories.into_iter().collect();
        let mut table: BTreeMap<ObesityLevel, Vec<usize>> = BTreeMap::new();
        for row in rows {
            let c = category(&row.case);
            let counts = table
                .entry(row.level)
                .or_insert_with(|| vec![0; categories.len()]);
            if let Ok(j) = categories.binary_search(&c) {
                counts[j] += 1;
            }
        }
        Ok(Self {
            columns: categories.iter().map(ToString::to_string).collect(),
            rows: table
                .into_iter()
                .map(|(level, counts)| CrossTabRow { level, counts })
                .collect(),
        })
    }

    pub fn count(&self, level: ObesityLevel, column: &str) -> usize {
        let Some(j) = self.columns.iter().position(|c| c == column) else {
            return 0;
        };
        self.rows
            .iter()
            .find(|r| r.level == level)
            .map_or(0, |r| r.counts[j])
    }

    pub fn total(&self) -> usize {
        self.rows.iter().flat_map(|r| &r.counts).sum()
    }
}

pub fn crosstab_by_gender(rows: &Rows<'_>) -> Result<CrossTab, StatsError> {
    CrossTab::build(rows, |c| c.gender)
}

pub fn crosstab_by_family_history(rows: &Rows<'_>) -> Result<CrossTab, StatsError> {
    CrossTab::build(rows, |c| c.family_history)
}

/// Five-number summary of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub level: ObesityLevel,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    fn from_values(level: ObesityLevel, mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Self {
            level,
            count: values.len(),
            min: values[0],
            q1: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q3: quantile(&values, 0.75),
            max: values[values.len() - 1],
        }
    }
}

/// Weight distribution per level, in severity order.
pub fn weight_box_stats(rows: &Rows<'_>) -> Result<Vec<BoxStats>, StatsError> {
    non_empty(rows)?;
    Ok(group_by_level(rows, |c| c.weight)
        .into_iter()
        .map(|(level, values)| BoxStats::from_values(level, values))
        .collect())
}

/// Per-level metric for [`mean_by_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    /// FAF, physical activity frequency
    PhysicalActivity,
    /// NCP, number of main meals
    MainMeals,
}

impl Metric {
    pub fn field(self) -> &'static str {
        match self {
            Metric::PhysicalActivity => fields::FAF,
            Metric::MainMeals => fields::NCP,
        }
    }

    fn value(self, case: &RawCase) -> f64 {
        match self {
            Metric::PhysicalActivity => case.faf,
            Metric::MainMeals => case.ncp,
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FAF" => Ok(Metric::PhysicalActivity),
            "NCP" => Ok(Metric::MainMeals),
            _ => Err(format!("unknown metric '{s}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelMean {
    pub level: ObesityLevel,
    pub mean: f64,
}

/// Mean of `metric` per level, sorted ascending by the mean.
pub fn mean_by_level(rows: &Rows<'_>, metric: Metric) -> Result<Vec<LevelMean>, StatsError> {
    non_empty(rows)?;
    let mut means: Vec<LevelMean> = group_by_level(rows, |c| metric.value(c))
        .into_iter()
        .map(|(level, values)| LevelMean {
            level,
            mean: mean(&values),
        })
        .collect();
    means.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    Ok(means)
}

/// Equal-width histogram. The last bin includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin containing `value`, or `None` outside the histogram's range.
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        let last_bin = self.counts.len().checked_sub(1)?;
        let (first, last) = (*self.edges.first()?, *self.edges.last()?);
        if !(first..=last).contains(&value) {
            return None;
        }
        // edges[i] opens bin i; the upper edge closes the last bin.
        let bin = self.edges.partition_point(|edge| *edge <= value);
        Some(bin.saturating_sub(1).min(last_bin))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Histogram of BMI over the rows with `bins` equal-width bins.
pub fn bmi_histogram(rows: &Rows<'_>, bins: usize) -> Result<Histogram, StatsError> {
    non_empty(rows)?;
    if bins == 0 {
        return Err(StatsError::NoBins);
    }
    let values: Vec<f64> = rows.iter().map(|r| r.bmi()).collect();
    let mut lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if hi == lo {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
    edges.push(hi);

    let mut histogram = Histogram {
        edges,
        counts: vec![0; bins],
    };
    for value in values {
        if let Some(bin) = histogram.bin_of(value) {
            histogram.counts[bin] += 1;
        }
    }
    debug!("bmi histogram over [{lo:.2}, {hi:.2}] with {bins} bins");
    Ok(histogram)
}

/// Numeric columns correlated by [`correlation_matrix`], in `RawCase::numeric_fields` order.
pub const CORRELATION_COLUMNS: [&str; 8] = [
    fields::AGE,
    fields::HEIGHT,
    fields::WEIGHT,
    fields::FCVC,
    fields::NCP,
    fields::CH2O,
    fields::FAF,
    fields::TUE,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}

/// Pearson correlations between the numeric answers.
pub fn correlation_matrix(rows: &Rows<'_>) -> Result<CorrelationMatrix, StatsError> {
    non_empty(rows)?;
    let n = CORRELATION_COLUMNS.len();
    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); n];
    for row in rows {
        for (column, (_, value)) in columns.iter_mut().zip(row.case.numeric_fields()) {
            column.push(value);
        }
    }
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    Ok(CorrelationMatrix {
        columns: CORRELATION_COLUMNS.iter().map(|c| c.to_string()).collect(),
        values,
    })
}

/// Everything the dashboard shows, computed in one pass over the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub overview: Overview,
    pub distribution: Vec<LevelShare>,
    pub by_gender: CrossTab,
    pub by_family_history: CrossTab,
    pub weight_by_level: Vec<BoxStats>,
    pub activity_by_level: Vec<LevelMean>,
    pub meals_by_level: Vec<LevelMean>,
    pub bmi: Histogram,
    pub correlations: CorrelationMatrix,
}

pub fn summarize(rows: &Rows<'_>, bins: usize) -> Result<Dashboard, StatsError> {
    Ok(Dashboard {
        overview: overview(rows)?,
        distribution: class_distribution(rows)?,
        by_gender: crosstab_by_gender(rows)?,
        by_family_history: crosstab_by_family_history(rows)?,
        weight_by_level: weight_box_stats(rows)?,
        activity_by_level: mean_by_level(rows, Metric::PhysicalActivity)?,
        meals_by_level: mean_by_level(rows, Metric::MainMeals)?,
        bmi: bmi_histogram(rows, bins)?,
        correlations: correlation_matrix(rows)?,
    })
}
