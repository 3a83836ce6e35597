//! Descriptive statistics over (filtered) dataset rows.
//!
//! Every aggregation takes the selected rows and fails with
//! [`StatsError::EmptySelection`] when there are none, so callers can tell
//! "nothing matched" apart from a real result.
mod basic;
pub mod chart;
pub mod dashboard;
mod error;

pub use basic::{mean, pearson, quantile};
pub use chart::{bar_chart_ascii, histogram_ascii};
pub use dashboard::{
    bmi_histogram, class_distribution, correlation_matrix, crosstab_by_family_history,
    crosstab_by_gender, mean_by_level, overview, summarize, weight_box_stats, BoxStats, CrossTab,
    CorrelationMatrix, Dashboard, Histogram, LevelMean, LevelShare, Metric, Overview,
    CORRELATION_COLUMNS,
};
pub use error::StatsError;
