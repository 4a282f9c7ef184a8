//! Message-level redaction policy for chat payloads.
//!
//! Only user-authored content leaves the machine unredacted: `user`
//! messages and `tool` results are scrubbed. System and assistant
//! messages pass through unmodified — assistant turns are either already
//! rehydrated or model output the user chose to replay.

use serde_json::Value;

use cloak_core::errors::CloakResult;
use cloak_core::traits::Vault;

use crate::redactor::Redactor;

/// Roles whose string content is redacted.
const REDACTED_ROLES: &[&str] = &["user", "tool"];

/// Redact a list of chat messages. Unknown fields, non-string contents
/// and non-object entries are preserved untouched.
pub fn redact_messages(
    redactor: &Redactor,
    vault: &dyn Vault,
    session: &str,
    messages: Vec<Value>,
) -> CloakResult<Vec<Value>> {
    messages
        .into_iter()
        .map(|mut message| {
            let Some(obj) = message.as_object_mut() else {
                return Ok(message);
            };
            let redacted_role = obj
                .get("role")
                .and_then(Value::as_str)
                .is_some_and(|role| REDACTED_ROLES.contains(&role));
            if !redacted_role {
                return Ok(message);
            }
            let content = obj
                .get("content")
                .and_then(Value::as_str)
                .map(str::to_string);
            if let Some(content) = content {
                if !content.is_empty() {
                    let result = redactor.redact(vault, session, &content)?;
                    obj.insert("content".to_string(), Value::String(result.text));
                }
            }
            Ok(message)
        })
        .collect()
}
