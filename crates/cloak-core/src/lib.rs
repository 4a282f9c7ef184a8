//! # cloak-core
//!
//! Foundation crate for the cloak PII redaction sidecar.
//! Defines the entity model, errors, configuration, offset mapping,
//! and the scanner/vault traits. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod offset;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{RedactorConfig, VaultBackendKind};
pub use entity::{EntityMatch, EntityType};
pub use errors::{CloakError, CloakResult};
pub use models::{RedactResult, VaultEntry};
