//! # Validator
//!
//! Thin orchestration over the scanner and censor, used at submission
//! boundaries (post title/body, comment body) and on the render path.
//! Never errors: rejections come back as structured outcomes the UI can
//! surface directly.

use crate::censor::ContentCensor;
use crate::pattern::PatternSet;
use crate::scanner::{ContentScanner, ScanVerdict};

/// Accept/reject decision with a user-facing message on rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl Validation {
    pub fn accepted() -> Self {
        Self { is_valid: true, error_message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { is_valid: false, error_message: Some(message.into()) }
    }
}

/// Submission gate for the community feed.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    scanner: ContentScanner<'a>,
    censor: ContentCensor<'a>,
}

impl Validator<'static> {
    pub fn new() -> Self {
        Self { scanner: ContentScanner::new(), censor: ContentCensor::new() }
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Validator<'a> {
    pub fn with_patterns(patterns: &'a PatternSet) -> Self {
        Self {
            scanner: ContentScanner::with_patterns(patterns),
            censor: ContentCensor::with_patterns(patterns),
        }
    }

    /// Title is checked first, then body; the first rejection wins.
    pub fn validate_post(&self, title: &str, body: &str) -> Validation {
        if let Some(rejection) = self.reject("Your title", self.scanner.scan(title)) {
            return rejection;
        }
        if let Some(rejection) = self.reject("Your post", self.scanner.scan(body)) {
            return rejection;
        }
        Validation::accepted()
    }

    pub fn validate_comment(&self, text: &str) -> Validation {
        match self.reject("Your comment", self.scanner.scan(text)) {
            Some(rejection) => rejection,
            None => Validation::accepted(),
        }
    }

    /// Render-path censoring for any title/body/comment text.
    pub fn display_text(&self, text: &str) -> String {
        self.censor.censor(text)
    }

    fn reject(&self, subject: &str, verdict: ScanVerdict) -> Option<Validation> {
        if !verdict.is_offensive {
            return None;
        }
        let reason = verdict.reason.unwrap_or_else(|| "flagged content".to_string());
        Some(Validation::rejected(format!(
            "{subject} was flagged by the community filter ({reason}). Please rephrase it and try again."
        )))
    }
}
