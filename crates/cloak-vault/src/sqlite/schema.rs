//! Vault schema: mappings and per-(session, type) counters.

use rusqlite::Connection;

use cloak_core::errors::CloakResult;

use crate::to_vault_err;

pub fn create_schema(conn: &Connection) -> CloakResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS vault_entries (
            session_id   TEXT NOT NULL,
            entity_type  TEXT NOT NULL,
            original     TEXT NOT NULL,
            token        TEXT NOT NULL,
            created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (session_id, entity_type, original)
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_session_token
            ON vault_entries(session_id, token);

        CREATE TABLE IF NOT EXISTS vault_counters (
            session_id   TEXT NOT NULL,
            entity_type  TEXT NOT NULL,
            next_seq     INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (session_id, entity_type)
        );
        ",
    )
    .map_err(|e| to_vault_err(e.to_string()))?;
    Ok(())
}
