//! In-memory vault backend. Lost on process exit.

use std::sync::Mutex;

use chrono::Utc;
use rustc_hash::FxHashMap;

use cloak_core::entity::EntityType;
use cloak_core::errors::CloakResult;
use cloak_core::models::VaultEntry;
use cloak_core::traits::Vault;

use crate::{to_vault_err, token};

#[derive(Default)]
struct SessionState {
    /// `(type_name, value)` → token.
    by_value: FxHashMap<(String, String), String>,
    /// token → value.
    by_token: FxHashMap<String, String>,
    /// Per-type allocation counter; next token gets `counter + 1`.
    counters: FxHashMap<String, i64>,
    /// Allocation order, for `dump`.
    entries: Vec<VaultEntry>,
}

/// Vault backed by process memory behind a single mutex.
pub struct MemoryVault {
    sessions: Mutex<FxHashMap<String, SessionState>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(FxHashMap::default()),
        }
    }

    fn with_sessions<F, T>(&self, f: F) -> CloakResult<T>
    where
        F: FnOnce(&mut FxHashMap<String, SessionState>) -> CloakResult<T>,
    {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| to_vault_err(format!("vault lock poisoned: {e}")))?;
        f(&mut guard)
    }
}

impl Default for MemoryVault {
    fn default() -> Self {
        Self::new()
    }
}

impl Vault for MemoryVault {
    fn get_or_create_token(
        &self,
        session: &str,
        entity_type: &EntityType,
        value: &str,
    ) -> CloakResult<String> {
        self.with_sessions(|sessions| {
            let state = sessions.entry(session.to_string()).or_default();
            let key = (entity_type.name().to_string(), value.to_string());
            if let Some(existing) = state.by_value.get(&key) {
                return Ok(existing.clone());
            }

            let counter = state
                .counters
                .entry(entity_type.name().to_string())
                .or_insert(0);
            *counter += 1;
            let tok = token::format_token(entity_type, *counter);

            state.by_value.insert(key, tok.clone());
            state.by_token.insert(tok.clone(), value.to_string());
            state.entries.push(VaultEntry {
                session_id: session.to_string(),
                token: tok.clone(),
                original_value: value.to_string(),
                entity_type: entity_type.clone(),
                created_at: Utc::now(),
            });
            Ok(tok)
        })
    }

    fn lookup_token(&self, session: &str, tok: &str) -> CloakResult<Option<String>> {
        self.with_sessions(|sessions| {
            Ok(sessions
                .get(session)
                .and_then(|state| state.by_token.get(tok))
                .cloned())
        })
    }

    fn rehydrate(&self, session: &str, text: &str) -> CloakResult<String> {
        self.with_sessions(|sessions| {
            let Some(state) = sessions.get(session) else {
                return Ok(text.to_string());
            };
            token::rehydrate_with(text, |tok| Ok(state.by_token.get(tok).cloned()))
        })
    }

    fn dump(&self, session: &str) -> CloakResult<Vec<VaultEntry>> {
        self.with_sessions(|sessions| {
            Ok(sessions
                .get(session)
                .map(|state| state.entries.clone())
                .unwrap_or_default())
        })
    }

    fn list_sessions(&self) -> CloakResult<Vec<String>> {
        self.with_sessions(|sessions| {
            let mut ids: Vec<String> = sessions.keys().cloned().collect();
            ids.sort();
            Ok(ids)
        })
    }

    fn delete_session(&self, session: &str) -> CloakResult<()> {
        self.with_sessions(|sessions| {
            sessions.remove(session);
            Ok(())
        })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
