//! Property: for any partition of a text into chunks, concatenating the
//! `feed` outputs plus `flush` equals rehydrating the whole text in one
//! call.

use std::sync::Arc;

use cloak_core::entity::EntityType;
use cloak_core::traits::Vault;
use cloak_engine::StreamingRehydrator;
use cloak_vault::MemoryVault;
use proptest::prelude::*;

fn seeded_vault() -> Arc<MemoryVault> {
    let vault = Arc::new(MemoryVault::new());
    vault
        .get_or_create_token("s1", &EntityType::Email, "john@acme.com")
        .unwrap();
    vault
        .get_or_create_token("s1", &EntityType::Person, "Alice Smith")
        .unwrap();
    vault
        .get_or_create_token("s1", &EntityType::UrlWithSecret, "https://x.io?key=k1")
        .unwrap();
    vault
}

/// Text fragments that stress the state machine: known tokens, unknown
/// tokens, truncated prefixes, stray guillemets and plain filler.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("«EMAIL_001»".to_string()),
        Just("«PERSON_001»".to_string()),
        Just("«URL_WITH_SECRET_001»".to_string()),
        Just("«SSN_031»".to_string()),
        Just("«EMAIL_".to_string()),
        Just("«EM".to_string()),
        Just("«".to_string()),
        Just("»".to_string()),
        Just("«lower»".to_string()),
        Just("«A_1»".to_string()),
        "[a-zA-Z0-9_ .,]{0,12}",
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn chunked_feed_matches_single_call(
        text in text_strategy(),
        chunk_lens in prop::collection::vec(1..7usize, 0..64),
    ) {
        let vault = seeded_vault();
        let expected = vault.rehydrate("s1", &text).unwrap();

        let chars: Vec<char> = text.chars().collect();
        let mut rehydrator = StreamingRehydrator::new(Arc::clone(&vault) as Arc<dyn Vault>, "s1");
        let mut out = String::new();
        let mut cursor = 0;
        let mut lens = chunk_lens.into_iter();
        while cursor < chars.len() {
            let take = lens.next().unwrap_or(3).min(chars.len() - cursor);
            let chunk: String = chars[cursor..cursor + take].iter().collect();
            out.push_str(&rehydrator.feed(&chunk).unwrap());
            cursor += take;
        }
        out.push_str(&rehydrator.flush().unwrap());

        prop_assert_eq!(out, expected);
    }

    #[test]
    fn no_input_character_is_lost_or_duplicated(
        text in "[a-zA-Z0-9 ]{0,64}",
        chunk_lens in prop::collection::vec(1..5usize, 0..32),
    ) {
        // Token-free input must stream through byte-identical.
        let vault = seeded_vault();
        let chars: Vec<char> = text.chars().collect();
        let mut rehydrator = StreamingRehydrator::new(vault, "s1");
        let mut out = String::new();
        let mut cursor = 0;
        let mut lens = chunk_lens.into_iter();
        while cursor < chars.len() {
            let take = lens.next().unwrap_or(2).min(chars.len() - cursor);
            let chunk: String = chars[cursor..cursor + take].iter().collect();
            out.push_str(&rehydrator.feed(&chunk).unwrap());
            cursor += take;
        }
        out.push_str(&rehydrator.flush().unwrap());
        prop_assert_eq!(out, text);
    }
}
