use crate::classification::classifier::ComparisonPattern;
use crate::error::ConfigError;
use crate::types::false_friend::{Classification, Severity};
use serde::Deserialize;
use std::collections::HashSet;

/// Score returned when one side has nothing to compare. Missing data is not
/// evidence of divergence.
pub const UNKNOWN_SIMILARITY: f64 = 0.5;

/// Cut-points used to turn a similarity score into a severity.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SimilarityThresholds {
    pub critical_below: f64,
    pub important_below: f64,
    /// Pairs at or above this score are not false friends.
    pub accept_below: f64,
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        Self {
            critical_below: 0.1,
            important_below: 0.2,
            accept_below: 0.3,
        }
    }
}

impl SimilarityThresholds {
    /// Each cut-point must lie in [0, 1] and critical must not exceed
    /// important. An `accept_below` under `important_below` is allowed and
    /// leaves the subtle band empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = [self.critical_below, self.important_below, self.accept_below]
            .iter()
            .all(|t| (0.0..=1.0).contains(t));
        if in_range && self.critical_below <= self.important_below {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds {
                reason: format!(
                    "expected critical ({}) <= important ({}), all in [0, 1] with accept ({})",
                    self.critical_below, self.important_below, self.accept_below
                ),
            })
        }
    }
}

fn token_set(meanings: &[String]) -> HashSet<String> {
    meanings
        .iter()
        .flat_map(|m| m.to_lowercase().split_whitespace().map(String::from).collect::<Vec<_>>())
        .collect()
}

/// Bag-of-words Jaccard overlap of two meaning lists, in [0, 1].
///
/// This is a triage signal for human review, not a semantic measure.
pub fn meaning_similarity(jp_meanings: &[String], cn_meanings: &[String]) -> f64 {
    if jp_meanings.is_empty() || cn_meanings.is_empty() {
        return UNKNOWN_SIMILARITY;
    }

    let jp_words = token_set(jp_meanings);
    let cn_words = token_set(cn_meanings);
    if jp_words.is_empty() || cn_words.is_empty() {
        return UNKNOWN_SIMILARITY;
    }

    let intersection = jp_words.intersection(&cn_words).count();
    let union = jp_words.union(&cn_words).count();
    if union == 0 {
        return UNKNOWN_SIMILARITY;
    }
    intersection as f64 / union as f64
}

/// Turns a similarity score into a classification, or `None` when the pair is
/// similar enough to be discarded.
pub fn derive_divergence(score: f64, thresholds: &SimilarityThresholds) -> Option<Classification> {
    if !(score < thresholds.accept_below) {
        return None;
    }

    let (pattern, severity) = if score < thresholds.critical_below {
        (ComparisonPattern::Divergent, Severity::Critical)
    } else if score < thresholds.important_below {
        (ComparisonPattern::BothExtra, Severity::Important)
    } else {
        (ComparisonPattern::BothExtra, Severity::Subtle)
    };

    pattern.classification().map(|base| Classification { severity, ..base })
}
