//! # ContentScanner
//!
//! Applies the compiled obfuscation-tolerant patterns plus an
//! excessive-capitalization heuristic to a text string and returns a
//! verdict. Pure: reuses the shared compiled patterns, never mutates.

use crate::pattern::{default_patterns, PatternSet};

/// Minimum text length (chars) before the capitalization heuristic applies.
const CAPS_MIN_LEN: usize = 20;

/// Uppercase-to-letters ratio above which text counts as shouting.
const CAPS_MAX_RATIO: f64 = 0.7;

/// Outcome of scanning one text string. Produced fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanVerdict {
    pub is_offensive: bool,
    pub reason: Option<String>,
}

impl ScanVerdict {
    pub fn clean() -> Self {
        Self { is_offensive: false, reason: None }
    }

    pub fn offensive(reason: impl Into<String>) -> Self {
        Self { is_offensive: true, reason: Some(reason.into()) }
    }
}

/// Stateless scanner over a shared compiled pattern set.
#[derive(Debug, Clone, Copy)]
pub struct ContentScanner<'a> {
    patterns: &'a PatternSet,
}

impl ContentScanner<'static> {
    /// Scanner over the process-wide default lexicon.
    pub fn new() -> Self {
        Self { patterns: default_patterns() }
    }
}

impl Default for ContentScanner<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ContentScanner<'a> {
    pub fn with_patterns(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Scan `text`. Patterns are tested in lexicon order; the first match
    /// wins and short-circuits. When no pattern matches, the
    /// capitalization heuristic gets a chance.
    pub fn scan(&self, text: &str) -> ScanVerdict {
        if text.is_empty() {
            return ScanVerdict::clean();
        }

        let lowered = text.to_lowercase();
        for (index, compiled) in self.patterns.terms().iter().enumerate() {
            if compiled.obfuscated().is_match(&lowered) {
                tracing::debug!(pattern = index, "scanner matched banned term");
                return ScanVerdict::offensive(format!("matched pattern {index}"));
            }
        }

        if Self::is_shouting(text) {
            tracing::debug!("scanner flagged excessive capitalization");
            return ScanVerdict::offensive("excessive capitalization");
        }

        ScanVerdict::clean()
    }

    /// Ratio of uppercase letters to total letters, non-letters excluded
    /// from both sides. Short texts are exempt.
    fn is_shouting(text: &str) -> bool {
        if text.chars().count() <= CAPS_MIN_LEN {
            return false;
        }
        let mut letters = 0usize;
        let mut uppercase = 0usize;
        for c in text.chars() {
            if c.is_alphabetic() {
                letters += 1;
                if c.is_uppercase() {
                    uppercase += 1;
                }
            }
        }
        letters > 0 && (uppercase as f64) / (letters as f64) > CAPS_MAX_RATIO
    }
}
