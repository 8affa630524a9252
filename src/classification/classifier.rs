//*** START FILE: src/classification/classifier.rs ***//
use crate::types::false_friend::{Category, Classification, Severity};

/// Meaning correspondence between the Japanese word and its Chinese counterpart,
/// as recorded in a comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonPattern {
    /// Same form, same meaning. Not a false friend.
    Same,
    /// No Chinese counterpart at all. Not a false friend.
    NoCounterpart,
    /// Japanese has senses Chinese lacks.
    JapaneseExtra,
    /// Chinese has senses Japanese lacks.
    ChineseExtra,
    /// Each side has senses the other lacks.
    BothExtra,
    /// The senses don't overlap.
    Divergent,
}

impl ComparisonPattern {
    /// Canonical mapping table. Every encoding is normalized into a pattern
    /// first, so this is the only place the triple is decided.
    pub fn classification(self) -> Option<Classification> {
        let (kind, severity, category) = match self {
            ComparisonPattern::Same | ComparisonPattern::NoCounterpart => return None,
            ComparisonPattern::JapaneseExtra => (1, Severity::Important, Category::ScopeDifference),
            ComparisonPattern::ChineseExtra => (2, Severity::Important, Category::ScopeDifference),
            ComparisonPattern::BothExtra => (3, Severity::Important, Category::ScopeDifference),
            ComparisonPattern::Divergent => (4, Severity::Critical, Category::TrueDivergence),
        };
        Some(Classification { kind, severity, category })
    }
}

/// The two code spaces seen in comparison tables: the full-width symbolic
/// markers of JCKV v3 and the letter codes used by older exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeEncoding {
    Symbolic,
    Alphabetic,
}

impl CodeEncoding {
    /// Letters (optionally joined by `/`, `+`, `-` or spaces) are alphabetic,
    /// anything else is treated as symbolic.
    pub fn detect(code: &str) -> Self {
        let mut letters = code
            .chars()
            .filter(|c| !matches!(c, '/' | '+' | '-' | ' ' | '?'))
            .peekable();
        if letters.peek().is_some() && letters.all(|c| c.is_ascii_alphabetic()) {
            CodeEncoding::Alphabetic
        } else {
            CodeEncoding::Symbolic
        }
    }

    pub fn normalize(self, code: &str) -> Option<ComparisonPattern> {
        match self {
            CodeEncoding::Symbolic => normalize_symbolic(code),
            CodeEncoding::Alphabetic => normalize_alphabetic(code),
        }
    }
}

fn normalize_symbolic(code: &str) -> Option<ComparisonPattern> {
    // Fold the half-width lookalikes that creep in when the sheet is re-exported.
    let folded: String = code
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '>' => '＞',
            '<' => '＜',
            '=' => '＝',
            'Φ' | 'ϕ' => 'φ',
            other => other,
        })
        .collect();

    match folded.as_str() {
        "＝" => Some(ComparisonPattern::Same),
        "φ" => Some(ComparisonPattern::NoCounterpart),
        "＞" => Some(ComparisonPattern::JapaneseExtra),
        "＜" => Some(ComparisonPattern::ChineseExtra),
        "＞＜" | "＜＞" => Some(ComparisonPattern::BothExtra),
        "≠" | "!＝" | "／" => Some(ComparisonPattern::Divergent),
        _ => None,
    }
}

fn normalize_alphabetic(code: &str) -> Option<ComparisonPattern> {
    let upper = code.trim().to_ascii_uppercase();

    let exact = match upper.as_str() {
        "S" => Some(ComparisonPattern::Same),
        "N" => Some(ComparisonPattern::NoCounterpart),
        "J" => Some(ComparisonPattern::JapaneseExtra),
        "C" => Some(ComparisonPattern::ChineseExtra),
        "JC" | "B" => Some(ComparisonPattern::BothExtra),
        "D" => Some(ComparisonPattern::Divergent),
        _ => None,
    };
    if exact.is_some() {
        return exact;
    }

    // Composite codes such as "J/S" or "JC?" only fall back to the three
    // extra-meaning sub-codes, broadest first.
    if upper.contains("JC") {
        Some(ComparisonPattern::BothExtra)
    } else if upper.contains('J') {
        Some(ComparisonPattern::JapaneseExtra)
    } else if upper.contains('C') {
        Some(ComparisonPattern::ChineseExtra)
    } else {
        None
    }
}

/// Classifies a trimmed comparison code in a known encoding. `None` means
/// "skip": same meaning, no counterpart, or a code we don't recognize.
pub fn classify(code: &str, encoding: CodeEncoding) -> Option<Classification> {
    encoding.normalize(code)?.classification()
}

/// Same as [`classify`] but picks the encoding from the code itself.
pub fn classify_detected(code: &str) -> Option<Classification> {
    classify(code, CodeEncoding::detect(code))
}

//*** END FILE: src/classification/classifier.rs ***//
