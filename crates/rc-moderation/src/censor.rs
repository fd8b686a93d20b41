//! # ContentCensor
//!
//! Replaces literal occurrences of banned terms with mask characters for
//! the render path. Works on exact, word-bounded, case-insensitive
//! matches only. Obfuscated spellings are the scanner's concern and are
//! rejected at submission instead of masked here.

use crate::pattern::{default_patterns, PatternSet};

/// Stateless censor over a shared compiled pattern set.
#[derive(Debug, Clone, Copy)]
pub struct ContentCensor<'a> {
    patterns: &'a PatternSet,
}

impl ContentCensor<'static> {
    /// Censor over the process-wide default lexicon.
    pub fn new() -> Self {
        Self { patterns: default_patterns() }
    }
}

impl Default for ContentCensor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ContentCensor<'a> {
    pub fn with_patterns(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Mask every literal occurrence of every banned term with a run of
    /// `*` equal in length to the term. Terms are applied sequentially in
    /// lexicon order, each as an independent left-to-right pass over the
    /// output of the previous one. Empty input is returned unchanged.
    pub fn censor(&self, text: &str) -> String {
        if text.is_empty() {
            return text.to_string();
        }
        let mut masked = text.to_string();
        for compiled in self.patterns.terms() {
            if compiled.term().is_empty() {
                continue;
            }
            if compiled.literal().is_match(&masked) {
                tracing::trace!(term = compiled.term(), "censoring banned term");
                masked = compiled
                    .literal()
                    .replace_all(&masked, compiled.mask())
                    .into_owned();
            }
        }
        masked
    }
}
