use fairval::FairvalError;
use thiserror::Error;

/// Failures surfaced by the `fairval` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Valuation(#[from] FairvalError),

    #[error("invalid symbol {0}")]
    Symbol(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
