//! Contract tests for the regex catalogue: every required pattern must
//! match its canonical examples, and the obvious near-misses must not.

use cloak_core::entity::EntityType;
use cloak_core::traits::Scanner;
use cloak_detect::RegexScanner;

fn matches_of(text: &str, entity_type: EntityType) -> Vec<String> {
    RegexScanner::new()
        .scan(text)
        .unwrap()
        .into_iter()
        .filter(|m| m.entity_type == entity_type)
        .map(|m| m.text)
        .collect()
}

// ── EMAIL ─────────────────────────────────────────────────────────────────

#[test]
fn email_matches_pragmatic_rfc5322() {
    assert_eq!(
        matches_of("write alice.b+tag%x@mail.example.co.uk now", EntityType::Email),
        vec!["alice.b+tag%x@mail.example.co.uk"]
    );
    assert!(matches_of("no at sign here", EntityType::Email).is_empty());
}

// ── PHONE ─────────────────────────────────────────────────────────────────

#[test]
fn phone_matches_canonical_forms() {
    assert_eq!(
        matches_of("call +1 234-567-8910 please", EntityType::Phone),
        vec!["+1 234-567-8910"]
    );
    assert_eq!(
        matches_of("call (555) 555-1234 please", EntityType::Phone),
        vec!["(555) 555-1234"]
    );
    assert_eq!(
        matches_of("call 555-123-4567 please", EntityType::Phone),
        vec!["555-123-4567"]
    );
}

#[test]
fn phone_does_not_swallow_an_ssn() {
    assert!(matches_of("SSN 123-45-6789", EntityType::Phone).is_empty());
}

// ── CREDIT_CARD ───────────────────────────────────────────────────────────

#[test]
fn credit_card_matches_grouped_and_contiguous() {
    assert_eq!(
        matches_of("card 4111-1111-1111-1111 ok", EntityType::CreditCard),
        vec!["4111-1111-1111-1111"]
    );
    assert_eq!(
        matches_of("card 4111 1111 1111 1111 ok", EntityType::CreditCard),
        vec!["4111 1111 1111 1111"]
    );
    assert_eq!(
        matches_of("card 4111111111111111 ok", EntityType::CreditCard),
        vec!["4111111111111111"]
    );
}

#[test]
fn credit_card_rejects_luhn_failures() {
    assert!(matches_of("card 1234-5678-9012-3456", EntityType::CreditCard).is_empty());
}

// ── SSN ───────────────────────────────────────────────────────────────────

#[test]
fn ssn_matches_dashed_form_only() {
    assert_eq!(
        matches_of("SSN: 123-45-6789", EntityType::Ssn),
        vec!["123-45-6789"]
    );
    assert!(matches_of("123-456-789", EntityType::Ssn).is_empty());
}

// ── IP_ADDRESS ────────────────────────────────────────────────────────────

#[test]
fn ipv4_respects_octet_ranges() {
    assert_eq!(
        matches_of("host 192.168.1.100 up", EntityType::IpAddress),
        vec!["192.168.1.100"]
    );
    assert_eq!(
        matches_of("edge 255.255.255.255 ok", EntityType::IpAddress),
        vec!["255.255.255.255"]
    );
    assert!(matches_of("bad 999.1.1.1 nope", EntityType::IpAddress).is_empty());
}

// ── DATE_OF_BIRTH ─────────────────────────────────────────────────────────

#[test]
fn date_of_birth_matches_iso_form() {
    assert_eq!(
        matches_of("born 1990-01-15 in town", EntityType::DateOfBirth),
        vec!["1990-01-15"]
    );
    assert!(matches_of("15/01/1990", EntityType::DateOfBirth).is_empty());
}

// ── AU_TFN ────────────────────────────────────────────────────────────────

#[test]
fn au_tfn_matches_three_three_three_grouping() {
    assert_eq!(
        matches_of("TFN 123 456 789 on file", EntityType::AuTfn),
        vec!["123 456 789"]
    );
    assert!(matches_of("123456789", EntityType::AuTfn).is_empty());
}

// ── AU_MEDICARE ───────────────────────────────────────────────────────────

#[test]
fn au_medicare_matches_four_five_one_grouping() {
    assert_eq!(
        matches_of("medicare 2123 45670 1 ok", EntityType::AuMedicare),
        vec!["2123 45670 1"]
    );
}

// ── URL_WITH_SECRET ───────────────────────────────────────────────────────

#[test]
fn url_with_secret_matches_secret_query_params() {
    for url in [
        "https://api.example.com/v1?key=abc123",
        "https://api.example.com/v1?token=abc123",
        "http://x.io/a?b=1&secret=s3cr3t",
        "https://x.io/a?ApiKey=Zz12",
    ] {
        let text = format!("fetch {url} now");
        assert_eq!(
            matches_of(&text, EntityType::UrlWithSecret),
            vec![url],
            "url: {url}"
        );
    }
}

#[test]
fn url_without_secret_params_is_not_flagged() {
    assert!(
        matches_of("see https://example.com/docs?page=2", EntityType::UrlWithSecret).is_empty()
    );
}

// ── API_KEY ───────────────────────────────────────────────────────────────

#[test]
fn api_key_matches_long_assignments() {
    assert_eq!(
        matches_of("api_key=xk_test_abcdefghijklmnop", EntityType::ApiKey),
        vec!["api_key=xk_test_abcdefghijklmnop"]
    );
    assert_eq!(
        matches_of("TOKEN: 0123456789abcdef0123", EntityType::ApiKey),
        vec!["TOKEN: 0123456789abcdef0123"]
    );
}

#[test]
fn short_values_are_not_api_keys() {
    assert!(matches_of("token=short", EntityType::ApiKey).is_empty());
}

// ── Scores ────────────────────────────────────────────────────────────────

#[test]
fn regex_scores_are_always_one() {
    let matches = RegexScanner::new()
        .scan("a@b.co 123-45-6789 192.168.0.1")
        .unwrap();
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|m| m.score == 1.0));
    assert!(matches.iter().all(|m| m.source == "regex"));
}
