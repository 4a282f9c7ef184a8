//! Credential-shaped patterns: secrets embedded in URLs and key
//! assignments. These outrank identity patterns in the catalogue so the
//! resolver keeps the outermost, highest-information match (an email
//! inside a URL-with-secret resolves to the URL).

use cloak_core::entity::EntityType;

use super::{pii_pattern, PiiPattern};

// ── URL carrying a secret query parameter ──────────────────────────────────
pii_pattern!(
    RE_URL_WITH_SECRET,
    r"https?://[^\s«»]+[?&](?i:api_key|apikey|key|token|secret)=[^\s&«»]+"
);

// ── Key/token/secret assignment ────────────────────────────────────────────
pii_pattern!(
    RE_API_KEY,
    r"(?i:api[_\-]?key|token|secret)\s*[=:]\s*[A-Za-z0-9_\-]{16,}"
);

/// Credential patterns in detection order.
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "url_with_secret",
            entity_type: EntityType::UrlWithSecret,
            regex: &RE_URL_WITH_SECRET,
            score: 1.0,
        },
        PiiPattern {
            name: "api_key",
            entity_type: EntityType::ApiKey,
            regex: &RE_API_KEY,
            score: 1.0,
        },
    ]
}
