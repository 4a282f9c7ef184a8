//! # cloak-engine
//!
//! Glues detection to the vault: the [`Redactor`] turns raw text into
//! tokenized text, [`messages`] applies the per-role policy for chat
//! payloads, and the [`StreamingRehydrator`] restores tokens inside a
//! chunked response stream.

pub mod messages;
pub mod redactor;
pub mod streaming;

pub use messages::redact_messages;
pub use redactor::Redactor;
pub use streaming::StreamingRehydrator;
