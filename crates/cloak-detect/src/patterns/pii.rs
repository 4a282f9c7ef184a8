//! Identity, financial and government-number patterns.

use cloak_core::entity::EntityType;

use super::{pii_pattern, PiiPattern};

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

// ── Phone (international + North American; separator required) ────────────
pii_pattern!(
    RE_PHONE,
    r"(?:\+\d{1,3}[\s.\-]?)?(?:\(\d{3}\)\s?|\d{3}[\s.\-])\d{3}[\s.\-]\d{4}\b"
);

// ── Credit card (13–19 digits, optional 4-groups) ──────────────────────────
pii_pattern!(
    RE_CREDIT_CARD,
    r"\b\d{4}(?:[\- ]?\d{4}){2}[\- ]?\d{1,7}\b"
);

// ── SSN (US) ───────────────────────────────────────────────────────────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── IPv4 (per-octet 0–255) ─────────────────────────────────────────────────
pii_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b"
);

// ── Date of birth (ISO form) ───────────────────────────────────────────────
pii_pattern!(RE_DOB, r"\b\d{4}-\d{2}-\d{2}\b");

// ── Australian TFN (3 3 3 grouping) ────────────────────────────────────────
pii_pattern!(RE_AU_TFN, r"\b\d{3} \d{3} \d{3}\b");

// ── Australian Medicare number ─────────────────────────────────────────────
pii_pattern!(RE_AU_MEDICARE, r"\b\d{4} \d{5} \d\b");

/// Identity patterns in detection order.
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "email",
            entity_type: EntityType::Email,
            regex: &RE_EMAIL,
            score: 1.0,
        },
        PiiPattern {
            name: "ssn",
            entity_type: EntityType::Ssn,
            regex: &RE_SSN,
            score: 1.0,
        },
        PiiPattern {
            name: "credit_card",
            entity_type: EntityType::CreditCard,
            regex: &RE_CREDIT_CARD,
            score: 1.0,
        },
        PiiPattern {
            name: "ipv4",
            entity_type: EntityType::IpAddress,
            regex: &RE_IPV4,
            score: 1.0,
        },
        PiiPattern {
            name: "phone",
            entity_type: EntityType::Phone,
            regex: &RE_PHONE,
            score: 1.0,
        },
        PiiPattern {
            name: "date_of_birth",
            entity_type: EntityType::DateOfBirth,
            regex: &RE_DOB,
            score: 1.0,
        },
        PiiPattern {
            name: "au_tfn",
            entity_type: EntityType::AuTfn,
            regex: &RE_AU_TFN,
            score: 1.0,
        },
        PiiPattern {
            name: "au_medicare",
            entity_type: EntityType::AuMedicare,
            regex: &RE_AU_MEDICARE,
            score: 1.0,
        },
    ]
}
