//! Parameterized statements over the vault tables.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use cloak_core::entity::EntityType;
use cloak_core::errors::CloakResult;
use cloak_core::models::VaultEntry;

use crate::to_vault_err;

pub fn find_token(
    conn: &Connection,
    session: &str,
    entity_type: &EntityType,
    value: &str,
) -> CloakResult<Option<String>> {
    conn.query_row(
        "SELECT token FROM vault_entries
         WHERE session_id = ?1 AND entity_type = ?2 AND original = ?3",
        params![session, entity_type.name(), value],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_vault_err(e.to_string()))
}

pub fn find_original(conn: &Connection, session: &str, token: &str) -> CloakResult<Option<String>> {
    conn.query_row(
        "SELECT original FROM vault_entries WHERE session_id = ?1 AND token = ?2",
        params![session, token],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_vault_err(e.to_string()))
}

/// Bump and return the allocation counter for `(session, entity_type)`.
/// Counters start at 1 and are never reused, even if the entry insert is
/// later surrendered to a concurrent writer.
pub fn next_seq(conn: &Connection, session: &str, entity_type: &EntityType) -> CloakResult<i64> {
    conn.execute(
        "INSERT INTO vault_counters (session_id, entity_type, next_seq) VALUES (?1, ?2, 1)
         ON CONFLICT(session_id, entity_type) DO UPDATE SET next_seq = next_seq + 1",
        params![session, entity_type.name()],
    )
    .map_err(|e| to_vault_err(e.to_string()))?;
    conn.query_row(
        "SELECT next_seq FROM vault_counters WHERE session_id = ?1 AND entity_type = ?2",
        params![session, entity_type.name()],
        |row| row.get(0),
    )
    .map_err(|e| to_vault_err(e.to_string()))
}

/// Insert a mapping. Returns `false` when another writer inserted the
/// same `(session, entity_type, original)` first — the pre-existing token
/// wins and the caller re-reads it.
pub fn insert_entry(
    conn: &Connection,
    session: &str,
    entity_type: &EntityType,
    value: &str,
    token: &str,
) -> CloakResult<bool> {
    let changed = conn
        .execute(
            "INSERT OR IGNORE INTO vault_entries (session_id, entity_type, original, token, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                session,
                entity_type.name(),
                value,
                token,
                Utc::now().to_rfc3339()
            ],
        )
        .map_err(|e| to_vault_err(e.to_string()))?;
    Ok(changed > 0)
}

pub fn dump_session(conn: &Connection, session: &str) -> CloakResult<Vec<VaultEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT session_id, entity_type, original, token, created_at
             FROM vault_entries WHERE session_id = ?1 ORDER BY rowid",
        )
        .map_err(|e| to_vault_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![session], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .map_err(|e| to_vault_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let (session_id, entity_type, original, token, created_at) =
            row.map_err(|e| to_vault_err(e.to_string()))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| to_vault_err(format!("created_at '{created_at}': {e}")))?
            .with_timezone(&Utc);
        entries.push(VaultEntry {
            session_id,
            token,
            original_value: original,
            entity_type: EntityType::from_name(&entity_type),
            created_at,
        });
    }
    Ok(entries)
}

pub fn list_sessions(conn: &Connection) -> CloakResult<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT session_id FROM vault_entries
             UNION
             SELECT session_id FROM vault_counters
             ORDER BY session_id",
        )
        .map_err(|e| to_vault_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_vault_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_vault_err(e.to_string()))
}

pub fn delete_session(conn: &Connection, session: &str) -> CloakResult<()> {
    conn.execute(
        "DELETE FROM vault_entries WHERE session_id = ?1",
        params![session],
    )
    .map_err(|e| to_vault_err(e.to_string()))?;
    conn.execute(
        "DELETE FROM vault_counters WHERE session_id = ?1",
        params![session],
    )
    .map_err(|e| to_vault_err(e.to_string()))?;
    Ok(())
}
