//! Optional named-entity layer.
//!
//! The recognizer is a capability discovered at first use, not an error:
//! initialization happens lazily on the first scan, and a failed load
//! downgrades the process permanently to regex-only detection. `/health`
//! surfaces the downgrade.

pub mod engine;
pub mod lexicon;

use std::collections::HashSet;
use std::sync::OnceLock;

use cloak_core::entity::{EntityMatch, EntityType};

pub use engine::NerEngine;

/// Entity types emitted when no whitelist is configured.
pub fn default_entities() -> Vec<EntityType> {
    vec![
        EntityType::Person,
        EntityType::Organization,
        EntityType::Location,
        EntityType::Nrp,
        EntityType::Url,
        EntityType::DateTime,
    ]
}

/// Map an upstream model label onto the canonical tag set.
pub fn normalize_label(label: &str) -> EntityType {
    match label {
        "PER" | "PERSON" => EntityType::Person,
        "ORG" | "ORGANIZATION" => EntityType::Organization,
        "LOC" | "GPE" | "LOCATION" => EntityType::Location,
        "NORP" | "NRP" => EntityType::Nrp,
        "DATE" | "TIME" | "DATE_TIME" => EntityType::DateTime,
        "URL" => EntityType::Url,
        other => EntityType::custom(other),
    }
}

/// Lazily-initialized NER scanner.
pub struct NerScanner {
    language: String,
    score_threshold: f64,
    allowed: HashSet<EntityType>,
    engine: OnceLock<Option<NerEngine>>,
}

impl NerScanner {
    /// `entities` is the whitelist of types to emit; empty means the
    /// default set.
    pub fn new(language: &str, score_threshold: f64, entities: &[EntityType]) -> Self {
        let allowed = if entities.is_empty() {
            default_entities().into_iter().collect()
        } else {
            entities.iter().cloned().collect()
        };
        Self {
            language: language.to_string(),
            score_threshold,
            allowed,
            engine: OnceLock::new(),
        }
    }

    fn engine(&self) -> Option<&NerEngine> {
        self.engine
            .get_or_init(|| match NerEngine::load(&self.language) {
                Ok(engine) => Some(engine),
                Err(e) => {
                    tracing::warn!(
                        language = %self.language,
                        error = %e,
                        "NER layer failed to initialize; continuing regex-only"
                    );
                    None
                }
            })
            .as_ref()
    }

    /// False once a load attempt has failed; the failure is permanent for
    /// the process lifetime.
    pub fn available(&self) -> bool {
        !matches!(self.engine.get(), Some(None))
    }

    /// Scan `text`, dropping matches below the score threshold, outside
    /// the type whitelist, or overlapping an exclusion span (char
    /// offsets; spans already claimed by the regex layer).
    pub fn scan_excluding(&self, text: &str, exclude: &[(usize, usize)]) -> Vec<EntityMatch> {
        let Some(engine) = self.engine() else {
            return Vec::new();
        };
        engine
            .analyze(text)
            .into_iter()
            .filter(|e| e.score >= self.score_threshold)
            .filter(|e| !exclude.iter().any(|&(s, en)| e.start < en && e.end > s))
            .filter_map(|e| {
                let entity_type = normalize_label(e.label);
                if !self.allowed.contains(&entity_type) {
                    return None;
                }
                Some(EntityMatch {
                    entity_type,
                    text: e.text,
                    start: e.start,
                    end: e.end,
                    score: e.score,
                    source: "ner".to_string(),
                })
            })
            .collect()
    }
}
