//! Streaming rehydrator: chunk-boundary behavior of the state machine.

use std::sync::Arc;

use cloak_core::entity::EntityType;
use cloak_core::traits::Vault;
use cloak_engine::StreamingRehydrator;
use cloak_vault::MemoryVault;

fn seeded_vault() -> Arc<MemoryVault> {
    let vault = Arc::new(MemoryVault::new());
    vault
        .get_or_create_token("s1", &EntityType::Email, "john@acme.com")
        .unwrap();
    vault
        .get_or_create_token("s1", &EntityType::Person, "Alice")
        .unwrap();
    vault
}

fn run(chunks: &[&str]) -> String {
    let vault = seeded_vault();
    let mut rehydrator = StreamingRehydrator::new(vault, "s1");
    let mut out = String::new();
    for chunk in chunks {
        out.push_str(&rehydrator.feed(chunk).unwrap());
    }
    out.push_str(&rehydrator.flush().unwrap());
    out
}

// ── Scenario 4: token split across chunks ─────────────────────────────────

#[test]
fn token_split_mid_name_and_mid_digits() {
    assert_eq!(run(&["abc «EM", "AIL_0", "01» def"]), "abc john@acme.com def");
}

#[test]
fn token_split_one_character_at_a_time() {
    let chunks: Vec<String> = "x «EMAIL_001» y".chars().map(String::from).collect();
    let refs: Vec<&str> = chunks.iter().map(String::as_str).collect();
    assert_eq!(run(&refs), "x john@acme.com y");
}

#[test]
fn whole_token_in_one_chunk() {
    assert_eq!(run(&["«EMAIL_001»"]), "john@acme.com");
}

// ── Non-token guillemet content ───────────────────────────────────────────

#[test]
fn lowercase_after_guillemet_is_not_a_token() {
    assert_eq!(run(&["«not a token»"]), "«not a token»");
}

#[test]
fn close_without_digits_is_emitted_verbatim() {
    assert_eq!(run(&["«EMAIL_» x"]), "«EMAIL_» x");
}

#[test]
fn digits_without_separator_are_not_a_token() {
    // No underscore directly before the digit run.
    assert_eq!(run(&["«E9» x"]), "«E9» x");
}

#[test]
fn reopened_guillemet_restarts_the_candidate() {
    assert_eq!(run(&["««EMAIL_001»"]), "«john@acme.com");
    assert_eq!(run(&["«EMA«EMAIL_001»"]), "«EMA«EMAIL_001»".replace("«EMAIL_001»", "john@acme.com"));
}

// ── Unknown tokens ────────────────────────────────────────────────────────

#[test]
fn unknown_token_passes_through_verbatim() {
    assert_eq!(run(&["hi «SSN_004» there"]), "hi «SSN_004» there");
}

// ── Flush semantics ───────────────────────────────────────────────────────

#[test]
fn flush_emits_residual_pending_prefix() {
    let vault = seeded_vault();
    let mut rehydrator = StreamingRehydrator::new(vault, "s1");
    let first = rehydrator.feed("abc «EMAIL").unwrap();
    assert_eq!(first, "abc ", "pending prefix must be withheld");
    assert_eq!(rehydrator.flush().unwrap(), "«EMAIL");
}

#[test]
fn flush_on_empty_stream_is_empty() {
    let vault = seeded_vault();
    let mut rehydrator = StreamingRehydrator::new(vault, "s1");
    assert_eq!(rehydrator.flush().unwrap(), "");
}

// ── Adjacent and repeated tokens ──────────────────────────────────────────

#[test]
fn adjacent_tokens_both_replace() {
    assert_eq!(run(&["«EMAIL_001»«PERSON_001»"]), "john@acme.comAlice");
}

#[test]
fn repeated_token_replaces_each_occurrence() {
    assert_eq!(
        run(&["«EMAIL_001» and «EMA", "IL_001»"]),
        "john@acme.com and john@acme.com"
    );
}

// ── Bounded buffer ────────────────────────────────────────────────────────

#[test]
fn overlong_pending_prefix_is_abandoned() {
    let long_name = "A".repeat(300);
    let input = format!("«{long_name} tail");
    let out = run(&[input.as_str()]);
    assert_eq!(out, input, "overlong candidate must be emitted verbatim");
}

// ── Session scoping ───────────────────────────────────────────────────────

#[test]
fn rehydration_is_scoped_to_the_session() {
    let vault = seeded_vault();
    let mut other = StreamingRehydrator::new(vault, "other-session");
    let mut out = other.feed("«EMAIL_001»").unwrap();
    out.push_str(&other.flush().unwrap());
    assert_eq!(out, "«EMAIL_001»", "tokens from another session stay opaque");
}

// ── Equivalence with whole-text rehydration ───────────────────────────────

#[test]
fn concatenated_feed_equals_single_call_rehydrate() {
    let vault = seeded_vault();
    let text = "Dear «PERSON_001», «EMAIL_001» is set. «X_1» stays. «nope» too.";
    let expected = vault.rehydrate("s1", text).unwrap();

    for split in [1, 2, 3, 5, 7, 11] {
        let chars: Vec<char> = text.chars().collect();
        let mut rehydrator = StreamingRehydrator::new(Arc::clone(&vault) as Arc<dyn Vault>, "s1");
        let mut out = String::new();
        for chunk in chars.chunks(split) {
            let chunk: String = chunk.iter().collect();
            out.push_str(&rehydrator.feed(&chunk).unwrap());
        }
        out.push_str(&rehydrator.flush().unwrap());
        assert_eq!(out, expected, "chunk size {split}");
    }
}
