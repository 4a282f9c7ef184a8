//! PRAGMA configuration for the vault connection.
//!
//! WAL journal, FULL sync (a committed token must survive power loss —
//! the caller already holds it), 5s busy_timeout, foreign_keys ON.

use rusqlite::Connection;

use cloak_core::errors::CloakResult;

use crate::to_vault_err;

pub fn apply_pragmas(conn: &Connection) -> CloakResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = FULL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_vault_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> CloakResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_vault_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
