//! Backend-agnostic vault semantics: both backends must behave
//! identically for allocation, lookup, rehydration and session handling.

use cloak_core::entity::EntityType;
use cloak_core::traits::Vault;
use cloak_vault::{MemoryVault, SqliteVault};

fn backends() -> Vec<(&'static str, Box<dyn Vault>, Option<tempfile::TempDir>)> {
    let dir = tempfile::tempdir().unwrap();
    let sqlite = SqliteVault::open(&dir.path().join("vault.db")).unwrap();
    vec![
        ("memory", Box::new(MemoryVault::new()) as Box<dyn Vault>, None),
        ("sqlite", Box::new(sqlite) as Box<dyn Vault>, Some(dir)),
    ]
}

// ── Allocation ────────────────────────────────────────────────────────────

#[test]
fn allocation_is_idempotent() {
    for (name, vault, _guard) in backends() {
        let t1 = vault
            .get_or_create_token("s1", &EntityType::Email, "a@b.com")
            .unwrap();
        let t2 = vault
            .get_or_create_token("s1", &EntityType::Email, "a@b.com")
            .unwrap();
        assert_eq!(t1, t2, "{name}: same value must yield same token");
        assert_eq!(t1, "«EMAIL_001»", "{name}");
    }
}

#[test]
fn distinct_values_get_sequential_tokens() {
    for (name, vault, _guard) in backends() {
        let t1 = vault
            .get_or_create_token("s1", &EntityType::Email, "a@b.com")
            .unwrap();
        let t2 = vault
            .get_or_create_token("s1", &EntityType::Email, "c@d.com")
            .unwrap();
        assert_eq!(t1, "«EMAIL_001»", "{name}");
        assert_eq!(t2, "«EMAIL_002»", "{name}");
    }
}

#[test]
fn counters_are_per_entity_type() {
    for (name, vault, _guard) in backends() {
        let email = vault
            .get_or_create_token("s1", &EntityType::Email, "a@b.com")
            .unwrap();
        let ssn = vault
            .get_or_create_token("s1", &EntityType::Ssn, "123-45-6789")
            .unwrap();
        assert_eq!(email, "«EMAIL_001»", "{name}");
        assert_eq!(ssn, "«SSN_001»", "{name}");
    }
}

#[test]
fn counter_grows_past_three_digits() {
    for (name, vault, _guard) in backends() {
        for i in 0..1000 {
            vault
                .get_or_create_token("s1", &EntityType::Phone, &format!("+1 555-000-{i:04}"))
                .unwrap();
        }
        let t = vault
            .get_or_create_token("s1", &EntityType::Phone, "overflow")
            .unwrap();
        assert_eq!(t, "«PHONE_1001»", "{name}: counter must widen past 999");
    }
}

#[test]
fn sessions_are_isolated() {
    for (name, vault, _guard) in backends() {
        let a = vault
            .get_or_create_token("alpha", &EntityType::Email, "a@b.com")
            .unwrap();
        let b = vault
            .get_or_create_token("beta", &EntityType::Email, "z@y.com")
            .unwrap();
        // Both sessions start their own numbering.
        assert_eq!(a, "«EMAIL_001»", "{name}");
        assert_eq!(b, "«EMAIL_001»", "{name}");
        assert_eq!(
            vault.lookup_token("beta", &a).unwrap().as_deref(),
            Some("z@y.com"),
            "{name}: beta's «EMAIL_001» is beta's own value"
        );
        assert_eq!(
            vault.lookup_token("gamma", &a).unwrap(),
            None,
            "{name}: unknown session sees nothing"
        );
    }
}

// ── Rehydration ───────────────────────────────────────────────────────────

#[test]
fn rehydrate_restores_known_tokens_and_keeps_unknown() {
    for (name, vault, _guard) in backends() {
        vault
            .get_or_create_token("s1", &EntityType::Person, "Alice")
            .unwrap();
        vault
            .get_or_create_token("s1", &EntityType::Email, "alice@x.com")
            .unwrap();
        let out = vault
            .rehydrate(
                "s1",
                "Dear «PERSON_001», your email «EMAIL_001» is confirmed. «EMAIL_999» stays.",
            )
            .unwrap();
        assert_eq!(
            out,
            "Dear Alice, your email alice@x.com is confirmed. «EMAIL_999» stays.",
            "{name}"
        );
    }
}

#[test]
fn rehydrate_handles_multi_underscore_type_names() {
    for (name, vault, _guard) in backends() {
        let tok = vault
            .get_or_create_token(
                "s1",
                &EntityType::UrlWithSecret,
                "https://x.io/cb?key=abc123",
            )
            .unwrap();
        assert_eq!(tok, "«URL_WITH_SECRET_001»", "{name}");
        let out = vault.rehydrate("s1", &format!("go {tok} now")).unwrap();
        assert_eq!(out, "go https://x.io/cb?key=abc123 now", "{name}");
    }
}

// ── Introspection & lifecycle ─────────────────────────────────────────────

#[test]
fn dump_returns_all_entries_in_allocation_order() {
    for (name, vault, _guard) in backends() {
        vault
            .get_or_create_token("s1", &EntityType::Email, "a@b.com")
            .unwrap();
        vault
            .get_or_create_token("s1", &EntityType::Ssn, "123-45-6789")
            .unwrap();
        let entries = vault.dump("s1").unwrap();
        assert_eq!(entries.len(), 2, "{name}");
        assert_eq!(entries[0].token, "«EMAIL_001»", "{name}");
        assert_eq!(entries[0].original_value, "a@b.com", "{name}");
        assert_eq!(entries[1].entity_type, EntityType::Ssn, "{name}");
        assert_eq!(entries[1].session_id, "s1", "{name}");
    }
}

#[test]
fn list_and_delete_sessions() {
    for (name, vault, _guard) in backends() {
        vault
            .get_or_create_token("alpha", &EntityType::Email, "a@b.com")
            .unwrap();
        vault
            .get_or_create_token("beta", &EntityType::Email, "c@d.com")
            .unwrap();
        assert_eq!(vault.list_sessions().unwrap(), vec!["alpha", "beta"], "{name}");

        vault.delete_session("alpha").unwrap();
        assert_eq!(vault.list_sessions().unwrap(), vec!["beta"], "{name}");
        assert!(vault.dump("alpha").unwrap().is_empty(), "{name}");
        assert_eq!(
            vault.lookup_token("alpha", "«EMAIL_001»").unwrap(),
            None,
            "{name}"
        );
    }
}

#[test]
fn delete_unknown_session_is_a_noop() {
    for (name, vault, _guard) in backends() {
        vault.delete_session("never-existed").unwrap();
        assert!(vault.list_sessions().unwrap().is_empty(), "{name}");
    }
}

// ── Concurrency ───────────────────────────────────────────────────────────

#[test]
fn concurrent_allocation_of_same_value_yields_one_token() {
    use std::sync::Arc;

    let dir = tempfile::tempdir().unwrap();
    let vaults: Vec<Arc<dyn Vault>> = vec![
        Arc::new(MemoryVault::new()),
        Arc::new(SqliteVault::open(&dir.path().join("vault.db")).unwrap()),
    ];
    for vault in vaults {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let vault = Arc::clone(&vault);
                std::thread::spawn(move || {
                    vault
                        .get_or_create_token("s1", &EntityType::Email, "race@x.com")
                        .unwrap()
                })
            })
            .collect();
        let tokens: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(
            tokens.windows(2).all(|w| w[0] == w[1]),
            "all threads must observe the same token: {tokens:?}"
        );
    }
}
