use thiserror::Error;

/// Errors raised at the boundaries: reading task files, parsing command line
/// values and writing reports. Simulation itself cannot fail.
///
/// Out-of-range numbers are never errors: they are clamped by the normalizer.
#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}, column {column}: '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("unknown policy '{0}', expected 'rm' or 'edf'")]
    UnknownPolicy(String),

    #[error("unknown output format '{0}', expected 'text', 'json' or 'csv'")]
    UnknownFormat(String),

    #[error("invalid horizon '{0}', expected a number or 'hyperperiod'")]
    InvalidHorizon(String),
}
