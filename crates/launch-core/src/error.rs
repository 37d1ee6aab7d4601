use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup errors raised while loading the launch dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("cannot open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("row {row}: invalid value in column '{column}': {reason}")]
    InvalidValue {
        row: usize,
        column: String,
        reason: String,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
