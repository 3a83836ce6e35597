use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no records match the selected filters")]
    EmptySelection,
    #[error("a histogram needs at least one bin")]
    NoBins,
}
