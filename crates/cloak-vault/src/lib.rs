//! # cloak-vault
//!
//! The authoritative store of the bijection between original values and
//! tokens, scoped per session. Two backends with identical semantics sit
//! behind [`cloak_core::traits::Vault`]: an in-memory map and a durable
//! SQLite file.

pub mod memory;
pub mod sqlite;
pub mod token;

use std::sync::Arc;

use cloak_core::config::{RedactorConfig, VaultBackendKind};
use cloak_core::errors::{CloakError, CloakResult};
use cloak_core::traits::Vault;

pub use memory::MemoryVault;
pub use sqlite::SqliteVault;

/// Map a backend failure message into `VaultUnavailable`.
pub(crate) fn to_vault_err(message: impl Into<String>) -> CloakError {
    CloakError::VaultUnavailable {
        message: message.into(),
    }
}

/// Open the vault selected by the config. The backend must be open before
/// the first request is accepted; failures here are startup failures.
pub fn open_vault(config: &RedactorConfig) -> CloakResult<Arc<dyn Vault>> {
    match config.vault_backend {
        VaultBackendKind::Memory => Ok(Arc::new(MemoryVault::new())),
        VaultBackendKind::Sqlite => {
            let vault = SqliteVault::open(&config.vault_path)?;
            Ok(Arc::new(vault))
        }
    }
}
