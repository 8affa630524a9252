//*** START FILE: src/types/false_friend.rs ***//
use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder the JCKV spreadsheet uses for a missing cell.
pub const MISSING_SENTINEL: &str = "--";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TrueDivergence,
    SimplificationMerge,
    JapaneseCoinage,
    ScopeDifference,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::TrueDivergence,
        Category::SimplificationMerge,
        Category::JapaneseCoinage,
        Category::ScopeDifference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TrueDivergence => "true_divergence",
            Category::SimplificationMerge => "simplification_merge",
            Category::JapaneseCoinage => "japanese_coinage",
            Category::ScopeDifference => "scope_difference",
        }
    }

    /// Human-readable blurb shipped in the dataset metadata.
    pub fn description(&self) -> &'static str {
        match self {
            Category::TrueDivergence => {
                "Meanings evolved differently over centuries in both languages"
            }
            Category::SimplificationMerge => {
                "Confusion exists because Simplified Chinese merged distinct Traditional characters"
            }
            Category::JapaneseCoinage => {
                "Word invented/repurposed in Meiji-era Japan, borrowed back to China"
            }
            Category::ScopeDifference => "Same core meaning but different range of usage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How badly a learner gets burned by the false friend.
///
/// Curated data is free text, so anything outside the three known levels is
/// kept verbatim and sorts after them instead of failing the load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critical,
    Important,
    Subtle,
    Unrecognized(String),
}

impl Severity {
    /// Sort rank: critical first, unknown values last.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Important => 1,
            Severity::Subtle => 2,
            Severity::Unrecognized(_) => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "critical",
            Severity::Important => "important",
            Severity::Subtle => "subtle",
            Severity::Unrecognized(other) => other,
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "critical" => Severity::Critical,
            "important" => Severity::Important,
            "subtle" => Severity::Subtle,
            _ => Severity::Unrecognized(raw),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which Chinese script variants the divergence applies to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Affects {
    #[default]
    Both,
    SimplifiedOnly,
    TraditionalOnly,
}

/// Provenance tag. Variant order is the trust order used by the merge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Auto,
    Jckv,
    Curated,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Auto => "auto",
            Source::Jckv => "jckv",
            Source::Curated => "curated",
        }
    }

    /// Confidence a loader assigns when it has nothing better to go on.
    pub fn default_confidence(&self) -> f64 {
        match self {
            Source::Curated => 1.0,
            Source::Jckv => 0.9,
            Source::Auto => 0.5,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `(type, severity, category)` triple a record is classified with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: u8,
    pub severity: Severity,
    pub category: Category,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FalseFriend {
    pub id: String,
    pub characters: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub category: Category,
    pub severity: Severity,
    #[serde(default)]
    pub affects: Affects,

    #[serde(default)]
    pub jp_reading: String,
    #[serde(default)]
    pub jp_meanings: Vec<String>,
    #[serde(default)]
    pub jp_example: String,
    #[serde(default)]
    pub jp_example_translation: String,

    #[serde(default)]
    pub cn_pinyin: String,
    /// Simplified form, only when it differs from `characters`.
    #[serde(default)]
    pub cn_characters: String,
    #[serde(default)]
    pub cn_meanings_simplified: Vec<String>,
    #[serde(default)]
    pub cn_meanings_traditional: Vec<String>,
    #[serde(default)]
    pub cn_example: String,
    #[serde(default)]
    pub cn_example_translation: String,

    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub mnemonic_tip: String,
    #[serde(default)]
    pub traditional_note: String,
    #[serde(default)]
    pub merged_from: Vec<String>,

    // Structured meanings, filled from the JCKV table
    #[serde(default)]
    pub shared_meanings: Vec<String>,
    #[serde(default)]
    pub jp_only_meanings: Vec<String>,
    #[serde(default)]
    pub cn_only_meanings: Vec<String>,

    pub source: Source,
    pub confidence: f64,
    pub needs_review: bool,
}

impl FalseFriend {
    /// Bare record with every annotation empty. Confidence and review flag
    /// follow the source; loaders overwrite whatever they know better.
    pub fn new(
        id: impl Into<String>,
        characters: impl Into<String>,
        classification: Classification,
        source: Source,
    ) -> Self {
        Self {
            id: id.into(),
            characters: characters.into(),
            kind: classification.kind,
            category: classification.category,
            severity: classification.severity,
            affects: Affects::Both,
            jp_reading: String::new(),
            jp_meanings: Vec::new(),
            jp_example: String::new(),
            jp_example_translation: String::new(),
            cn_pinyin: String::new(),
            cn_characters: String::new(),
            cn_meanings_simplified: Vec::new(),
            cn_meanings_traditional: Vec::new(),
            cn_example: String::new(),
            cn_example_translation: String::new(),
            explanation: String::new(),
            mnemonic_tip: String::new(),
            traditional_note: String::new(),
            merged_from: Vec::new(),
            shared_meanings: Vec::new(),
            jp_only_meanings: Vec::new(),
            cn_only_meanings: Vec::new(),
            source,
            confidence: source.default_confidence(),
            needs_review: source != Source::Curated,
        }
    }

    /// Checks the record-level invariants. Loaders drop records that fail.
    pub fn validate(&self) -> Result<(), RecordError> {
        let chars = self.characters.trim();
        if chars.is_empty() || chars == MISSING_SENTINEL {
            return Err(RecordError::MissingCharacters { id: self.id.clone() });
        }
        if !(1..=4).contains(&self.kind) {
            return Err(RecordError::InvalidType { id: self.id.clone(), kind: self.kind });
        }
        let inconsistent = match self.category {
            Category::ScopeDifference => self.kind == 4,
            Category::TrueDivergence => self.kind != 4 && self.source != Source::Curated,
            Category::SimplificationMerge | Category::JapaneseCoinage => false,
        };
        if inconsistent {
            return Err(RecordError::InconsistentCategory {
                id: self.id.clone(),
                kind: self.kind,
                category: self.category.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(RecordError::ConfidenceOutOfRange {
                id: self.id.clone(),
                confidence: self.confidence,
            });
        }
        if self.source == Source::Curated && (self.confidence != 1.0 || self.needs_review) {
            return Err(RecordError::CuratedNotAuthoritative { id: self.id.clone() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divergent() -> Classification {
        Classification {
            kind: 4,
            severity: Severity::Critical,
            category: Category::TrueDivergence,
        }
    }

    #[test]
    fn new_record_follows_source_defaults() {
        let curated = FalseFriend::new("ff_001", "手紙", divergent(), Source::Curated);
        assert_eq!(curated.confidence, 1.0);
        assert!(!curated.needs_review);

        let jckv = FalseFriend::new("jckv_0001", "手紙", divergent(), Source::Jckv);
        assert_eq!(jckv.confidence, 0.9);
        assert!(jckv.needs_review);
    }

    #[test]
    fn sentinel_characters_are_rejected() {
        let ff = FalseFriend::new("jckv_0001", MISSING_SENTINEL, divergent(), Source::Jckv);
        assert!(matches!(ff.validate(), Err(RecordError::MissingCharacters { .. })));

        let blank = FalseFriend::new("jckv_0002", "  ", divergent(), Source::Jckv);
        assert!(blank.validate().is_err());
    }

    #[test]
    fn type_four_cannot_be_scope_difference() {
        let mut ff = FalseFriend::new("jckv_0001", "勉強", divergent(), Source::Jckv);
        ff.category = Category::ScopeDifference;
        assert!(matches!(ff.validate(), Err(RecordError::InconsistentCategory { kind: 4, .. })));
    }

    #[test]
    fn curated_records_may_use_true_divergence_with_any_type() {
        let mut ff = FalseFriend::new("ff_010", "大丈夫", divergent(), Source::Curated);
        ff.kind = 2;
        assert_eq!(ff.validate(), Ok(()));

        ff.source = Source::Auto;
        assert!(ff.validate().is_err());
    }

    #[test]
    fn curated_record_must_be_authoritative() {
        let mut ff = FalseFriend::new("ff_002", "愛人", divergent(), Source::Curated);
        ff.needs_review = true;
        assert!(matches!(ff.validate(), Err(RecordError::CuratedNotAuthoritative { .. })));
    }

    #[test]
    fn unknown_severity_round_trips_and_sorts_last() {
        let sev: Severity = serde_json::from_str("\"mild\"").unwrap();
        assert_eq!(sev, Severity::Unrecognized("mild".to_string()));
        assert_eq!(sev.rank(), 3);
        assert_eq!(serde_json::to_string(&sev).unwrap(), "\"mild\"");

        let critical: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(critical.rank(), 0);
    }

    #[test]
    fn type_field_is_serialized_as_type() {
        let ff = FalseFriend::new("ff_003", "汽車", divergent(), Source::Curated);
        let value = serde_json::to_value(&ff).unwrap();
        assert_eq!(value["type"], 4);
        assert_eq!(value["category"], "true_divergence");
        assert_eq!(value["affects"], "both");
    }
}
//*** END FILE: src/types/false_friend.rs ***//
