//! Thin command dispatcher over the same operations the HTTP service
//! exposes. Input comes from stdin; structured output is JSON on stdout.
//! CLI state always lives in the SQLite vault so it survives across
//! invocations.

use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cloak_core::config::{self, RedactorConfig, VaultBackendKind};
use cloak_core::entity::EntityType;
use cloak_core::errors::CloakError;
use cloak_core::traits::Vault;
use cloak_engine::{redact_messages, Redactor};

use crate::server;

#[derive(Parser, Debug)]
#[command(name = "pii-redactor", version, about = "PII redaction for LLM pipelines")]
pub struct Cli {
    /// SQLite vault path (default: ~/.pii-redactor/vault.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Session scope for vault operations
    #[arg(long = "session-id", global = true)]
    session_id: Option<String>,

    /// Regex-only mode: disable the NER layer
    #[arg(long = "no-presidio", global = true)]
    no_presidio: bool,

    /// Language tag for the NER layer
    #[arg(long, global = true)]
    language: Option<String>,

    /// Minimum NER confidence
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Comma-separated entity types never to redact
    #[arg(long = "skip-types", global = true)]
    skip_types: Option<String>,

    /// Comma-separated literal values never to redact
    #[arg(long = "allow-list", global = true)]
    allow_list: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Redact chat messages (JSON array on stdin)
    Redact,
    /// Redact plain text from stdin
    RedactText,
    /// Rehydrate tokens in text from stdin
    Rehydrate,
    /// Clear a session's vault
    Clear,
    /// Dump a session's vault mappings as JSON
    Dump,
    /// List all sessions
    Sessions,
    /// Run the HTTP sidecar
    Serve {
        /// Loopback port (default: 18791, or PII_REDACTOR_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.build_config()?;

        match &self.command {
            Commands::Redact => {
                let vault = cloak_vault::open_vault(&config)?;
                let redactor = Redactor::new(&config);
                let session = self.require_session()?;
                let input = read_stdin()?;
                let messages: Vec<serde_json::Value> = serde_json::from_str(&input)
                    .map_err(|e| CloakError::invalid_input(format!("messages: {e}")))?;
                let redacted = redact_messages(&redactor, vault.as_ref(), &session, messages)?;
                println!("{}", serde_json::to_string(&redacted)?);
            }
            Commands::RedactText => {
                let vault = cloak_vault::open_vault(&config)?;
                let redactor = Redactor::new(&config);
                let session = self.require_session()?;
                let input = read_stdin()?;
                let result = redactor.redact(vault.as_ref(), &session, &input)?;
                println!("{}", serde_json::to_string(&result)?);
            }
            Commands::Rehydrate => {
                let vault = cloak_vault::open_vault(&config)?;
                let session = self.require_session()?;
                let input = read_stdin()?;
                print!("{}", vault.rehydrate(&session, &input)?);
            }
            Commands::Clear => {
                let vault = cloak_vault::open_vault(&config)?;
                let session = self.require_session()?;
                vault.delete_session(&session)?;
                println!("{}", serde_json::json!({"status": "cleared"}));
            }
            Commands::Dump => {
                let vault = cloak_vault::open_vault(&config)?;
                let session = self.require_session()?;
                let entries = vault.dump(&session)?;
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            Commands::Sessions => {
                let vault = cloak_vault::open_vault(&config)?;
                println!("{}", serde_json::to_string(&vault.list_sessions()?)?);
            }
            Commands::Serve { port } => {
                let port = config::resolve_port(*port)?;
                let vault: Arc<dyn Vault> = cloak_vault::open_vault(&config)?;
                let redactor = Arc::new(Redactor::new(&config));
                server::serve(redactor, vault, port).await?;
            }
        }
        Ok(())
    }

    /// Session-scoped commands refuse to guess a session.
    fn require_session(&self) -> Result<String, CloakError> {
        self.session_id
            .clone()
            .ok_or_else(|| CloakError::invalid_input("--session-id is required"))
    }

    fn build_config(&self) -> anyhow::Result<RedactorConfig> {
        let mut config = RedactorConfig {
            // The CLI always persists: the vault must survive across calls.
            vault_backend: VaultBackendKind::Sqlite,
            vault_path: config::default_vault_path(),
            ..RedactorConfig::default()
        };
        config.apply_env()?;
        if let Some(db) = &self.db {
            config.vault_path = db.clone();
        }
        if self.no_presidio {
            config.use_presidio = false;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(threshold) = self.threshold {
            config.score_threshold = threshold;
        }
        if let Some(skip) = &self.skip_types {
            config.skip_types = parse_type_list(skip);
        }
        if let Some(allow) = &self.allow_list {
            config.allow_list = allow
                .split(',')
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(config)
    }
}

fn parse_type_list(raw: &str) -> HashSet<EntityType> {
    raw.split(',')
        .filter(|t| !t.is_empty())
        .map(EntityType::from_name)
        .collect()
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input)
}
