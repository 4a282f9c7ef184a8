//! Shared wire and storage records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityMatch, EntityType};

/// Result of redacting a single text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactResult {
    /// Redacted text with tokens substituted for detected spans.
    pub text: String,
    /// The resolved, non-overlapping matches, left to right.
    pub entities: Vec<EntityMatch>,
    /// Length of `entities`.
    pub token_count: usize,
}

/// One value↔token mapping held by the vault.
///
/// Within a session, `token` is unique and `(entity_type, original_value)`
/// is unique — the same value always maps to the same token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultEntry {
    pub session_id: String,
    pub token: String,
    pub original_value: String,
    pub entity_type: EntityType,
    pub created_at: DateTime<Utc>,
}
