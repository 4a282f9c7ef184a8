//! The deterministic regex layer. Functions with the NER layer disabled.

use cloak_core::entity::{EntityMatch, EntityType};
use cloak_core::errors::CloakResult;
use cloak_core::offset::CharIndex;
use cloak_core::traits::Scanner;

use crate::patterns::{self, luhn_check, PiiPattern};

/// Scanner over the fixed pattern catalogue. Scores are always 1.0.
pub struct RegexScanner {
    patterns: Vec<PiiPattern>,
}

impl RegexScanner {
    pub fn new() -> Self {
        Self {
            patterns: patterns::all_patterns(),
        }
    }

    /// Names of patterns whose regex failed to compile at init.
    pub fn pattern_health(&self) -> Vec<&'static str> {
        self.patterns
            .iter()
            .filter(|p| p.regex.is_none())
            .map(|p| p.name)
            .collect()
    }

    fn accept(&self, pattern: &PiiPattern, matched: &str) -> bool {
        if pattern.entity_type != EntityType::CreditCard {
            return true;
        }
        let digits: String = matched.chars().filter(|c| c.is_ascii_digit()).collect();
        (13..=19).contains(&digits.len()) && luhn_check(&digits)
    }
}

impl Default for RegexScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for RegexScanner {
    fn name(&self) -> &str {
        "regex"
    }

    fn scan(&self, text: &str) -> CloakResult<Vec<EntityMatch>> {
        let index = CharIndex::new(text);
        let mut matches = Vec::new();
        for pattern in &self.patterns {
            let Some(re) = pattern.regex.as_ref() else {
                continue;
            };
            for m in re.find_iter(text) {
                if !self.accept(pattern, m.as_str()) {
                    continue;
                }
                matches.push(EntityMatch {
                    entity_type: pattern.entity_type.clone(),
                    text: m.as_str().to_string(),
                    start: index.byte_to_char(m.start()),
                    end: index.byte_to_char(m.end()),
                    score: pattern.score,
                    source: self.name().to_string(),
                });
            }
        }
        Ok(matches)
    }
}
