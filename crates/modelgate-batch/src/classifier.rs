// SPDX-FileCopyrightText: 2026 Modelgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Length-based item classification.
//!
//! Classifies batch items as simple or complex by character length against a
//! configured threshold. Zero-cost heuristic rules: no LLM pre-call, no
//! network, no latency.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classification of one batch item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemClass {
    /// Below the length threshold; handled by the cheap worker.
    Simple,
    /// At or above the length threshold; handled by the expensive worker.
    Complex,
}

/// Classifies items by character length.
#[derive(Debug, Clone, Copy)]
pub struct LengthClassifier {
    max_len_threshold: usize,
}

impl LengthClassifier {
    /// Create a classifier with the given character-length threshold.
    pub fn new(max_len_threshold: usize) -> Self {
        Self { max_len_threshold }
    }

    /// Classify an item: lengths strictly below the threshold are simple,
    /// everything else is complex (the threshold is exclusive on the simple
    /// side).
    pub fn classify(&self, item: &str) -> ItemClass {
        if item.chars().count() < self.max_len_threshold {
            ItemClass::Simple
        } else {
            ItemClass::Complex
        }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> usize {
        self.max_len_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_items_are_simple() {
        let classifier = LengthClassifier::new(300);
        assert_eq!(classifier.classify("short log line"), ItemClass::Simple);
        assert_eq!(classifier.classify(""), ItemClass::Simple);
    }

    #[test]
    fn long_items_are_complex() {
        let classifier = LengthClassifier::new(300);
        assert_eq!(classifier.classify(&"x".repeat(700)), ItemClass::Complex);
    }

    #[test]
    fn threshold_is_exclusive_on_the_simple_side() {
        let classifier = LengthClassifier::new(300);
        assert_eq!(classifier.classify(&"x".repeat(299)), ItemClass::Simple);
        assert_eq!(classifier.classify(&"x".repeat(300)), ItemClass::Complex);
    }

    #[test]
    fn classifies_by_chars_not_bytes() {
        let classifier = LengthClassifier::new(4);
        // 3 multibyte chars, more than 4 bytes.
        assert_eq!(classifier.classify("ççç"), ItemClass::Simple);
    }

    #[test]
    fn class_display() {
        assert_eq!(ItemClass::Simple.to_string(), "simple");
        assert_eq!(ItemClass::Complex.to_string(), "complex");
    }
}
