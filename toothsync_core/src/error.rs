use thiserror::Error;

/// Construction-time contract violations.
///
/// Per-event computation is total: degenerate runtime inputs are handled by
/// local substitution (see `accel` and `belief`), never surfaced as errors.
#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing tooth map")]
    MissingToothMap,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
