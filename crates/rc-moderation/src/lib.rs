//! recoverly-community/crates/rc-moderation/src/lib.rs
//!
//! Obfuscation-resistant offensive-content detection and masking for the
//! community feed. Patterns are compiled once per process from a fixed
//! lexicon; scanning and censoring are pure functions over shared,
//! read-only state.

pub mod censor;
pub mod lexicon;
pub mod pattern;
pub mod scanner;
pub mod validator;

// Re-exporting for easier access in other crates
pub use censor::ContentCensor;
pub use lexicon::BANNED_TERMS;
pub use pattern::{default_patterns, PatternSet};
pub use scanner::{ContentScanner, ScanVerdict};
pub use validator::{Validation, Validator};
