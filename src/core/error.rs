//! Engine error type
//!
//! Every fallible entry point returns `Result<T, EngineError>`; the wasm
//! facade turns these into thrown JS errors.

use thiserror::Error;

/// Errors surfaced to the host
#[derive(Debug, Error)]
pub enum EngineError {
    /// Gas name not in the registry
    #[error("unknown gas type: {0:?} (expected \"CO2\", \"CH4\" or \"R410a\")")]
    UnknownGas(String),

    /// Gas id not in the registry
    #[error("unknown gas id: {0} (expected 0, 1 or 2)")]
    UnknownGasId(u8),

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings JSON failed to parse
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
