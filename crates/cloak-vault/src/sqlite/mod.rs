//! Durable vault backend: one SQLite file, one mutex-guarded write
//! connection. The allocation transaction commits before the token is
//! returned, so a token handed to a caller is always recoverable after a
//! crash.

pub mod pragmas;
pub mod queries;
pub mod schema;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;

use cloak_core::entity::EntityType;
use cloak_core::errors::CloakResult;
use cloak_core::models::VaultEntry;
use cloak_core::traits::Vault;

use crate::{to_vault_err, token};

#[derive(Debug)]
pub struct SqliteVault {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteVault {
    /// Open (creating if needed) the vault file, apply pragmas and run the
    /// schema. Parent directories are created on demand.
    pub fn open(path: &Path) -> CloakResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| to_vault_err(format!("create {}: {e}", parent.display())))?;
            }
        }
        let conn = Connection::open(path)
            .map_err(|e| to_vault_err(format!("open {}: {e}", path.display())))?;
        pragmas::apply_pragmas(&conn)?;
        schema::create_schema(&conn)?;
        tracing::debug!(path = %path.display(), "vault opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_conn<F, T>(&self, f: F) -> CloakResult<T>
    where
        F: FnOnce(&Connection) -> CloakResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_vault_err(format!("vault lock poisoned: {e}")))?;
        f(&guard)
    }
}

impl Vault for SqliteVault {
    fn get_or_create_token(
        &self,
        session: &str,
        entity_type: &EntityType,
        value: &str,
    ) -> CloakResult<String> {
        self.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_vault_err(format!("allocate begin: {e}")))?;

            if let Some(existing) = queries::find_token(&tx, session, entity_type, value)? {
                return Ok(existing);
            }

            let seq = queries::next_seq(&tx, session, entity_type)?;
            let tok = token::format_token(entity_type, seq);

            let inserted = queries::insert_entry(&tx, session, entity_type, value, &tok)?;
            let tok = if inserted {
                tok
            } else {
                // Another writer got here first: its token wins, our
                // sequence number is surrendered.
                queries::find_token(&tx, session, entity_type, value)?
                    .ok_or_else(|| to_vault_err("mapping vanished during allocation"))?
            };

            tx.commit()
                .map_err(|e| to_vault_err(format!("allocate commit: {e}")))?;
            Ok(tok)
        })
    }

    fn lookup_token(&self, session: &str, tok: &str) -> CloakResult<Option<String>> {
        self.with_conn(|conn| queries::find_original(conn, session, tok))
    }

    fn rehydrate(&self, session: &str, text: &str) -> CloakResult<String> {
        self.with_conn(|conn| {
            token::rehydrate_with(text, |tok| queries::find_original(conn, session, tok))
        })
    }

    fn dump(&self, session: &str) -> CloakResult<Vec<VaultEntry>> {
        self.with_conn(|conn| queries::dump_session(conn, session))
    }

    fn list_sessions(&self) -> CloakResult<Vec<String>> {
        self.with_conn(queries::list_sessions)
    }

    fn delete_session(&self, session: &str) -> CloakResult<()> {
        self.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_vault_err(format!("delete begin: {e}")))?;
            queries::delete_session(&tx, session)?;
            tx.commit()
                .map_err(|e| to_vault_err(format!("delete commit: {e}")))?;
            tracing::info!(session, "session cleared");
            Ok(())
        })
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
