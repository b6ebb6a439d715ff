//! Error types for the simulation core
//!
//! The per-tick path is infallible. Errors only come from setup:
//! normalizing a seed vector and loading/validating configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Tried to scale the zero vector to unit length
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,
    /// A vector component was NaN or infinite
    #[error("vector has non-finite components: ({0}, {1})")]
    NonFinite(f32, f32),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
