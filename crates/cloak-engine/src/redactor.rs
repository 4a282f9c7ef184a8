//! The main redaction pipeline.

use std::collections::HashSet;
use std::sync::Arc;

use cloak_core::config::RedactorConfig;
use cloak_core::entity::EntityType;
use cloak_core::errors::CloakResult;
use cloak_core::models::RedactResult;
use cloak_core::offset::CharIndex;
use cloak_core::traits::{Scanner, Vault};
use cloak_detect::{resolve_spans, ScannerRegistry};

/// Layered PII redactor. Reusable and thread-safe after construction;
/// the vault is passed per call so sessions stay explicit.
pub struct Redactor {
    registry: ScannerRegistry,
    skip_types: HashSet<EntityType>,
    allow_list: HashSet<String>,
}

impl Redactor {
    pub fn new(config: &RedactorConfig) -> Self {
        Self {
            registry: ScannerRegistry::from_config(config),
            skip_types: config.skip_types.clone(),
            allow_list: config.allow_list.clone(),
        }
    }

    /// Attach a custom scanner (config time, before first use).
    pub fn with_custom_scanner(mut self, scanner: Arc<dyn Scanner>) -> Self {
        self.registry.push_custom(scanner);
        self
    }

    /// Whether the NER layer is configured and has not failed to load.
    pub fn ner_available(&self) -> bool {
        self.registry.ner_available()
    }

    /// Replace every detected span in `text` with a vault token.
    pub fn redact(
        &self,
        vault: &dyn Vault,
        session: &str,
        text: &str,
    ) -> CloakResult<RedactResult> {
        let matches = self.registry.scan(text);
        let resolved = resolve_spans(matches, &self.skip_types, &self.allow_list)?;

        let index = CharIndex::new(text);
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for m in &resolved {
            out.push_str(index.slice(text, cursor, m.start));
            let token = vault.get_or_create_token(session, &m.entity_type, &m.text)?;
            out.push_str(&token);
            cursor = m.end;
        }
        out.push_str(index.slice(text, cursor, index.char_len()));

        tracing::debug!(
            session,
            detected = resolved.len(),
            "redacted text"
        );
        Ok(RedactResult {
            text: out,
            token_count: resolved.len(),
            entities: resolved,
        })
    }
}
