//! # cloak-sidecar
//!
//! The process boundary: a loopback HTTP service and a CLI façade over
//! the same redact/rehydrate/clear operations.

pub mod cli;
pub mod server;
