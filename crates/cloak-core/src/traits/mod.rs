//! Seam traits: detection and storage are pluggable behind these.

pub mod scanner;
pub mod vault;

pub use scanner::Scanner;
pub use vault::Vault;
