//! Chunk-boundary-safe token replacement.
//!
//! Provider responses arrive as arbitrary fragments; a token like
//! `«EMAIL_001»` may be split anywhere, including between the bytes of a
//! guillemet. The rehydrator is an explicit state machine over an
//! append-only buffer: everything outside the current candidate prefix is
//! emitted immediately, and concatenating all `feed` outputs with
//! `flush` equals rehydrating the whole stream in one call.

use std::sync::Arc;

use cloak_core::errors::CloakResult;
use cloak_core::traits::Vault;

const OPEN: char = '«';
const CLOSE: char = '»';

/// A pending prefix longer than this cannot be a real token; it is
/// emitted verbatim and scanning resumes.
const MAX_PENDING_CHARS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Forwarding bytes; watching for `«`.
    Scanning,
    /// Inside a candidate token, consuming the `[A-Z_]` name run.
    PendingName,
    /// Inside a candidate token, consuming the digit run.
    PendingDigits,
}

pub struct StreamingRehydrator {
    vault: Arc<dyn Vault>,
    session: String,
    state: State,
    /// The candidate token prefix, including the leading `«`.
    pending: String,
    pending_chars: usize,
}

impl StreamingRehydrator {
    pub fn new(vault: Arc<dyn Vault>, session: impl Into<String>) -> Self {
        Self {
            vault,
            session: session.into(),
            state: State::Scanning,
            pending: String::new(),
            pending_chars: 0,
        }
    }

    /// Append a chunk and return all text that is definitively decided.
    pub fn feed(&mut self, chunk: &str) -> CloakResult<String> {
        let mut out = String::with_capacity(chunk.len());
        for c in chunk.chars() {
            self.step(c, &mut out)?;
        }
        Ok(out)
    }

    /// Finalize the stream. Residual pending content was not a token and
    /// is emitted verbatim.
    pub fn flush(&mut self) -> CloakResult<String> {
        self.state = State::Scanning;
        self.pending_chars = 0;
        Ok(std::mem::take(&mut self.pending))
    }

    fn step(&mut self, input: char, out: &mut String) -> CloakResult<()> {
        // An aborting character is reprocessed from Scanning: it may
        // itself open the next candidate token.
        let mut reprocess = Some(input);
        while let Some(c) = reprocess.take() {
            match self.state {
                State::Scanning => {
                    if c == OPEN {
                        self.begin_pending(c);
                    } else {
                        out.push(c);
                    }
                }
                State::PendingName => {
                    if c.is_ascii_uppercase() || c == '_' {
                        self.push_pending(c, out);
                    } else if c.is_ascii_digit() && self.digit_run_may_start() {
                        self.push_pending(c, out);
                        self.state = State::PendingDigits;
                    } else {
                        self.abort(out);
                        reprocess = Some(c);
                    }
                }
                State::PendingDigits => {
                    if c.is_ascii_digit() {
                        self.push_pending(c, out);
                    } else if c == CLOSE {
                        self.complete(out)?;
                    } else {
                        self.abort(out);
                        reprocess = Some(c);
                    }
                }
            }
        }
        Ok(())
    }

    /// The digit run may start only after `«NAME_`: the prefix must end
    /// in the separator underscore with at least one name char before it.
    fn digit_run_may_start(&self) -> bool {
        self.pending_chars >= 3 && self.pending.ends_with('_')
    }

    fn begin_pending(&mut self, c: char) {
        self.state = State::PendingName;
        self.pending.push(c);
        self.pending_chars = 1;
    }

    fn push_pending(&mut self, c: char, out: &mut String) {
        self.pending.push(c);
        self.pending_chars += 1;
        if self.pending_chars > MAX_PENDING_CHARS {
            self.abort(out);
        }
    }

    fn abort(&mut self, out: &mut String) {
        out.push_str(&self.pending);
        self.pending.clear();
        self.pending_chars = 0;
        self.state = State::Scanning;
    }

    fn complete(&mut self, out: &mut String) -> CloakResult<()> {
        self.pending.push(CLOSE);
        let token = std::mem::take(&mut self.pending);
        self.pending_chars = 0;
        self.state = State::Scanning;
        match self.vault.lookup_token(&self.session, &token)? {
            Some(original) => out.push_str(&original),
            None => out.push_str(&token),
        }
        Ok(())
    }
}
