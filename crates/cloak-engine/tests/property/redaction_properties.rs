//! Property: rehydrating redacted text restores the original input.

use cloak_core::config::RedactorConfig;
use cloak_core::traits::Vault;
use cloak_engine::Redactor;
use cloak_vault::MemoryVault;
use proptest::prelude::*;

fn piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,10}",
        "[a-z]{2,8}@[a-z]{2,8}\\.(com|org|io)",
        "[0-9]{3}-[0-9]{2}-[0-9]{4}",
        Just("192.168.1.77".to_string()),
        Just("+1 234-567-8910".to_string()),
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(piece(), 0..10).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn redact_then_rehydrate_round_trips(text in text_strategy()) {
        let config = RedactorConfig {
            use_presidio: false,
            ..RedactorConfig::default()
        };
        let redactor = Redactor::new(&config);
        let vault = MemoryVault::new();

        let result = redactor.redact(&vault, "s1", &text).unwrap();
        let restored = vault.rehydrate("s1", &result.text).unwrap();
        prop_assert_eq!(restored, text);
    }

    #[test]
    fn detected_values_never_survive_redaction(text in text_strategy()) {
        let config = RedactorConfig {
            use_presidio: false,
            ..RedactorConfig::default()
        };
        let redactor = Redactor::new(&config);
        let vault = MemoryVault::new();

        let result = redactor.redact(&vault, "s1", &text).unwrap();
        for entity in &result.entities {
            prop_assert!(
                !result.text.contains(&entity.text),
                "'{}' survived in '{}'",
                entity.text,
                result.text
            );
        }
    }
}
