use std::path::PathBuf;

use adipo_case::CaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: {source}")]
    Case {
        line: u64,
        #[source]
        source: CaseError,
    },
}
