//! The fixed, ordered pattern catalogue.
//!
//! Patterns that fail to compile at init time become `None` and simply
//! produce no matches; [`crate::regex_scanner::RegexScanner::pattern_health`]
//! reports them.

use cloak_core::entity::EntityType;
use regex::Regex;
use std::sync::LazyLock;

pub mod pii;
pub mod secrets;

/// A compiled detection pattern labelled with its entity type.
pub struct PiiPattern {
    pub name: &'static str,
    pub entity_type: EntityType,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub score: f64,
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}
pub(crate) use pii_pattern;

/// Full catalogue in detection order (most specific first).
pub fn all_patterns() -> Vec<PiiPattern> {
    let mut patterns = secrets::all_patterns();
    patterns.extend(pii::all_patterns());
    patterns
}

/// Luhn checksum over an ASCII digit string. Non-digits are rejected.
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}
