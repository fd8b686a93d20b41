//! # Pattern Compilation
//!
//! Turns the banned-term lexicon into two families of compiled matchers:
//! obfuscation-tolerant patterns for the scanner (character-class
//! substitution plus flexible inter-character noise) and word-bounded
//! literal patterns for the censor. Compilation is pure and happens once
//! per process.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::lexicon::BANNED_TERMS;

/// Visually/phonetically equivalent character classes for common
/// letter substitutions. Unmapped characters match literally.
fn substitution_class(c: char) -> Option<&'static str> {
    match c {
        'a' => Some("[a@4]+"),
        'b' => Some("[b8]+"),
        'e' => Some("[e3]+"),
        'g' => Some("[g9]+"),
        'i' => Some("[i1!]+"),
        'l' => Some("[l1]+"),
        'o' => Some("[o0]+"),
        's' => Some("[s5$]+"),
        't' => Some("[t7]+"),
        _ => None,
    }
}

/// Zero or more whitespace/punctuation between character slots, so that
/// "b a d" and "b-a-d" match the same pattern as "bad".
const NOISE_GAP: &str = "[\\W_]*";

/// A banned term together with its compiled matchers.
#[derive(Debug)]
pub struct CompiledTerm {
    term: String,
    /// Obfuscation-tolerant matcher used by the scanner.
    obfuscated: Regex,
    /// Exact literal, word-bounded matcher used by the censor.
    literal: Regex,
    /// Mask run the censor substitutes for this term.
    mask: String,
}

impl CompiledTerm {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn obfuscated(&self) -> &Regex {
        &self.obfuscated
    }

    pub fn literal(&self) -> &Regex {
        &self.literal
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }
}

/// The full compiled pattern set, index-aligned with the source term list.
#[derive(Debug)]
pub struct PatternSet {
    terms: Vec<CompiledTerm>,
}

impl PatternSet {
    /// Compile one pattern pair per term. Pure: the same term list yields
    /// the same patterns every time. An empty term degenerates to a
    /// pattern that matches only itself (the empty string), which the
    /// scanner's empty-input guard makes unreachable in practice.
    pub fn compile(terms: &[&str]) -> Result<Self, regex::Error> {
        let compiled = terms
            .iter()
            .map(|term| Self::compile_term(term))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms: compiled })
    }

    fn compile_term(term: &str) -> Result<CompiledTerm, regex::Error> {
        let obfuscated = RegexBuilder::new(&Self::obfuscation_source(term))
            .case_insensitive(true)
            .build()?;
        let literal_source = if term.is_empty() {
            "^$".to_string()
        } else {
            format!("\\b{}\\b", regex::escape(term))
        };
        let literal = RegexBuilder::new(&literal_source)
            .case_insensitive(true)
            .build()?;
        Ok(CompiledTerm {
            term: term.to_string(),
            obfuscated,
            literal,
            mask: "*".repeat(term.chars().count()),
        })
    }

    /// One slot per character, noise gaps spliced between slots, the whole
    /// pattern anchored on word boundaries.
    fn obfuscation_source(term: &str) -> String {
        if term.is_empty() {
            return "^$".to_string();
        }
        let slots: Vec<String> = term
            .chars()
            .map(|c| match substitution_class(c) {
                Some(class) => class.to_string(),
                None => regex::escape(&c.to_string()),
            })
            .collect();
        format!("\\b{}\\b", slots.join(NOISE_GAP))
    }

    pub fn terms(&self) -> &[CompiledTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Process-wide pattern set compiled from the built-in lexicon. Read-only
/// after initialization, safe to share without synchronization.
static DEFAULT_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::compile(BANNED_TERMS).expect("built-in lexicon must compile")
});

pub fn default_patterns() -> &'static PatternSet {
    &DEFAULT_PATTERNS
}
