//! Typed configuration, loadable from an inline JSON map, a JSON file,
//! and environment-variable overrides.
//!
//! Custom scanners are deliberately not part of the serialized config:
//! they are attached programmatically at construction time.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entity::EntityType;
use crate::errors::{CloakError, CloakResult};

/// Default loopback port for the sidecar.
pub const DEFAULT_PORT: u16 = 18791;

/// Default minimum NER confidence.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.35;

/// Environment variable names honored by both the CLI and the server.
pub mod env_vars {
    pub const NO_PRESIDIO: &str = "PII_REDACTOR_NO_PRESIDIO";
    pub const THRESHOLD: &str = "PII_REDACTOR_THRESHOLD";
    pub const DB: &str = "PII_REDACTOR_DB";
    pub const PORT: &str = "PII_REDACTOR_PORT";
}

/// Which vault implementation backs the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultBackendKind {
    Memory,
    Sqlite,
}

impl VaultBackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Redaction pipeline configuration. Immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactorConfig {
    /// Enable the NER layer.
    pub use_presidio: bool,
    /// Language tag passed to the NER layer.
    pub language: String,
    /// Minimum NER confidence; matches below are discarded.
    pub score_threshold: f64,
    /// Whitelist of NER entity types to emit (empty = defaults).
    pub entities: Vec<EntityType>,
    /// Entity types never redacted, applied after detection.
    pub skip_types: HashSet<EntityType>,
    /// Literal values never redacted, applied after detection.
    pub allow_list: HashSet<String>,
    /// Vault backend selection.
    pub vault_backend: VaultBackendKind,
    /// Filesystem path for persistent backends.
    pub vault_path: PathBuf,
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            use_presidio: true,
            language: "en".to_string(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            entities: Vec::new(),
            skip_types: HashSet::new(),
            allow_list: HashSet::new(),
            vault_backend: VaultBackendKind::Memory,
            vault_path: default_vault_path(),
        }
    }
}

impl RedactorConfig {
    /// Load from an inline JSON map. The map may be the config itself or
    /// nest it under a `"pii_redactor"` key (the shape host gateways embed).
    pub fn from_value(value: serde_json::Value) -> CloakResult<Self> {
        let inner = match value {
            serde_json::Value::Object(mut map) => match map.remove("pii_redactor") {
                Some(nested) => nested,
                None => serde_json::Value::Object(map),
            },
            other => other,
        };
        let mut config: Self = serde_json::from_value(inner)
            .map_err(|e| CloakError::invalid_input(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    pub fn from_file(path: &Path) -> CloakResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CloakError::invalid_input(format!("config file {}: {e}", path.display()))
        })?;
        let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            CloakError::invalid_input(format!("config file {}: {e}", path.display()))
        })?;
        Self::from_value(value)
    }

    /// Apply `PII_REDACTOR_*` environment overrides on top of the loaded
    /// values. Unparseable values are rejected rather than ignored.
    pub fn apply_env(&mut self) -> CloakResult<()> {
        if let Ok(v) = std::env::var(env_vars::NO_PRESIDIO) {
            if !v.is_empty() && v != "0" {
                self.use_presidio = false;
            }
        }
        if let Ok(v) = std::env::var(env_vars::THRESHOLD) {
            self.score_threshold = v.parse().map_err(|_| {
                CloakError::invalid_input(format!("{}: not a float: {v}", env_vars::THRESHOLD))
            })?;
        }
        if let Ok(v) = std::env::var(env_vars::DB) {
            self.vault_path = PathBuf::from(v);
            self.vault_backend = VaultBackendKind::Sqlite;
        }
        self.validate()
    }

    fn validate(&self) -> CloakResult<()> {
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(CloakError::invalid_input(format!(
                "score_threshold must be in [0.0, 1.0], got {}",
                self.score_threshold
            )));
        }
        Ok(())
    }
}

/// Resolve the sidecar port: explicit flag wins, then the environment,
/// then the default.
pub fn resolve_port(flag: Option<u16>) -> CloakResult<u16> {
    if let Some(p) = flag {
        return Ok(p);
    }
    match std::env::var(env_vars::PORT) {
        Ok(v) => v.parse().map_err(|_| {
            CloakError::invalid_input(format!("{}: not a port: {v}", env_vars::PORT))
        }),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// Default on-disk vault location: `~/.pii-redactor/vault.db`.
pub fn default_vault_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".pii-redactor").join("vault.db"))
        .unwrap_or_else(|| PathBuf::from("vault.db"))
}
