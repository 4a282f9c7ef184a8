//! Scanner registry: invokes every enabled detector over the same input
//! and concatenates the results into one canonical span set.

use std::sync::Arc;

use rayon::prelude::*;

use cloak_core::config::RedactorConfig;
use cloak_core::entity::EntityMatch;
use cloak_core::traits::Scanner;

use crate::ner::NerScanner;
use crate::regex_scanner::RegexScanner;

struct RegisteredScanner {
    scanner: Arc<dyn Scanner>,
    /// Stamped into `EntityMatch::source` ("regex" or "custom:<name>").
    source: String,
}

pub struct ScannerRegistry {
    scanners: Vec<RegisteredScanner>,
    ner: Option<NerScanner>,
}

impl ScannerRegistry {
    pub fn from_config(config: &RedactorConfig) -> Self {
        let regex = RegexScanner::new();
        let broken = regex.pattern_health();
        if !broken.is_empty() {
            tracing::warn!(patterns = ?broken, "regex patterns failed to compile");
        }

        let ner = config.use_presidio.then(|| {
            NerScanner::new(&config.language, config.score_threshold, &config.entities)
        });

        Self {
            scanners: vec![RegisteredScanner {
                scanner: Arc::new(regex),
                source: "regex".to_string(),
            }],
            ner,
        }
    }

    /// Register a custom scanner. Its matches are stamped with the source
    /// `custom:<name>`.
    pub fn push_custom(&mut self, scanner: Arc<dyn Scanner>) {
        let source = format!("custom:{}", scanner.name());
        self.scanners.push(RegisteredScanner { scanner, source });
    }

    /// True unless the NER layer is disabled or its load has failed.
    pub fn ner_available(&self) -> bool {
        self.ner.as_ref().is_some_and(|n| n.available())
    }

    /// Run every scanner over `text` and concatenate results. A failing
    /// scanner contributes nothing for this call; the others still run.
    /// The NER layer runs after the trait scanners so regex spans can be
    /// passed to it as exclusion zones.
    pub fn scan(&self, text: &str) -> Vec<EntityMatch> {
        let mut all: Vec<EntityMatch> = self
            .scanners
            .par_iter()
            .map(|registered| match registered.scanner.scan(text) {
                Ok(mut matches) => {
                    for m in &mut matches {
                        m.source = registered.source.clone();
                    }
                    matches
                }
                Err(e) => {
                    tracing::warn!(
                        scanner = %registered.scanner.name(),
                        error = %e,
                        "scanner failed; treating its output as empty"
                    );
                    Vec::new()
                }
            })
            .flatten()
            .collect();

        if let Some(ner) = &self.ner {
            let exclude: Vec<(usize, usize)> = all
                .iter()
                .filter(|m| m.source == "regex")
                .map(|m| (m.start, m.end))
                .collect();
            all.extend(ner.scan_excluding(text, &exclude));
        }

        all
    }
}
