//! # cloak-detect
//!
//! Layered PII detection. The regex catalogue is the zero-dependency
//! floor; the NER layer is an optional capability; custom scanners plug
//! in behind the same [`cloak_core::traits::Scanner`] seam. The span
//! resolver turns the combined output into a non-overlapping,
//! left-to-right emission list.

pub mod ner;
pub mod patterns;
pub mod regex_scanner;
pub mod registry;
pub mod resolver;

pub use ner::NerScanner;
pub use regex_scanner::RegexScanner;
pub use registry::ScannerRegistry;
pub use resolver::resolve_spans;
