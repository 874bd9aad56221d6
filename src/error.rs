//! Error type shared by the engine and the encodings.
//!
//! Both kinds are raised before the first generation runs. Once a run has
//! started every operator is total over valid input, so nothing fails
//! mid-run.

/// Errors reported by configuration or instance validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvolveError {
    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The problem instance is malformed (empty, non-square, mismatched).
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvolveError>;
