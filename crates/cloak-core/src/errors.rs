//! Error taxonomy for the redaction pipeline.
//!
//! Scanner failures are absorbed at the registry (that scanner's output is
//! empty for the call); vault failures always surface to the caller — a
//! silent in-memory fallback would break the rehydration contract.

/// Result alias used throughout the workspace.
pub type CloakResult<T> = Result<T, CloakError>;

#[derive(Debug, thiserror::Error)]
pub enum CloakError {
    /// Malformed request or arguments; reported to the caller, no retry.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A single scanner raised. Absorbed by the registry; other scanners
    /// still run.
    #[error("scanner '{scanner}' failed: {message}")]
    Scanner { scanner: String, message: String },

    /// The persistent store cannot be read or written. Surfaced to the
    /// caller; the operation is not retried internally.
    #[error("vault unavailable: {message}")]
    VaultUnavailable { message: String },

    /// The NER model cannot initialize. The system downgrades permanently
    /// to regex-only for the process lifetime.
    #[error("model load failed: {message}")]
    ModelLoad { message: String },

    /// Internal invariant violation (e.g. overlap after span resolution).
    #[error("protocol error: {message}")]
    Protocol { message: String },
}

impl CloakError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn vault_unavailable(message: impl Into<String>) -> Self {
        Self::VaultUnavailable {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
