//! Storage seam: the bijection between original values and tokens.

use crate::entity::EntityType;
use crate::errors::CloakResult;
use crate::models::VaultEntry;

/// Session-scoped value↔token store.
///
/// All operations are thread-safe. Within one session,
/// `get_or_create_token` calls are linearizable: two concurrent
/// allocations of the same previously-unseen value yield the same token.
/// Sessions are created lazily on first allocation and live until
/// `delete_session`.
pub trait Vault: Send + Sync {
    /// Return the existing token for `(entity_type, value)` in `session`,
    /// or allocate a new one. Idempotent. For persistent backends the
    /// write is durable before the token is returned.
    fn get_or_create_token(
        &self,
        session: &str,
        entity_type: &EntityType,
        value: &str,
    ) -> CloakResult<String>;

    /// Original value for a token, if the session knows it.
    fn lookup_token(&self, session: &str, token: &str) -> CloakResult<Option<String>>;

    /// Replace every known token in `text` with its original value.
    /// Unknown tokens pass through verbatim.
    fn rehydrate(&self, session: &str, text: &str) -> CloakResult<String>;

    /// All mappings held for a session.
    fn dump(&self, session: &str) -> CloakResult<Vec<VaultEntry>>;

    fn list_sessions(&self) -> CloakResult<Vec<String>>;

    fn delete_session(&self, session: &str) -> CloakResult<()>;

    /// Short backend name surfaced by `/health` ("memory" or "sqlite").
    fn backend_name(&self) -> &'static str;
}
