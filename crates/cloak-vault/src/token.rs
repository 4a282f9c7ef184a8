//! Token grammar: `«TYPE_NNN»`.
//!
//! Guillemets keep tokens lexically distinguishable from redactable
//! content. The counter is zero-padded to three digits and grows wider
//! past 999; the type/counter split sits at the last underscore because
//! type names themselves contain underscores.

use cloak_core::entity::EntityType;
use cloak_core::errors::{CloakError, CloakResult};
use regex::Regex;
use std::sync::LazyLock;

/// Whole-token matcher with type and counter captures.
static TOKEN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"«([A-Z_]+)_([0-9]+)»").ok());

fn token_re() -> CloakResult<&'static Regex> {
    TOKEN_RE
        .as_ref()
        .ok_or_else(|| CloakError::protocol("token pattern failed to compile"))
}

/// Render the token for an allocation sequence number.
pub fn format_token(entity_type: &EntityType, seq: i64) -> String {
    format!("«{}_{seq:03}»", entity_type.name())
}

/// Split a well-formed token into its type and sequence number.
pub fn parse_token(token: &str) -> Option<(EntityType, i64)> {
    let re = TOKEN_RE.as_ref()?;
    let caps = re.captures(token)?;
    if caps.get(0)?.as_str() != token {
        return None;
    }
    let seq: i64 = caps.get(2)?.as_str().parse().ok()?;
    Some((EntityType::from_name(caps.get(1)?.as_str()), seq))
}

/// Replace every token-shaped substring of `text` using `lookup`.
/// Unknown tokens (lookup returns `None`) pass through verbatim.
pub fn rehydrate_with<F>(text: &str, mut lookup: F) -> CloakResult<String>
where
    F: FnMut(&str) -> CloakResult<Option<String>>,
{
    let re = token_re()?;
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        match lookup(m.as_str())? {
            Some(original) => out.push_str(&original),
            None => out.push_str(m.as_str()),
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}
