use super::dictionary::MeaningDictionary;
use crate::classification::similarity::{
    derive_divergence, meaning_similarity, SimilarityThresholds,
};
use crate::types::false_friend::{FalseFriend, Source};
use tracing::{debug, info};

/// Flags words shared by both dictionaries whose meanings barely overlap.
///
/// Every candidate needs review: the score is a bag-of-words triage signal.
/// Candidates come back most-divergent first (descending confidence); ties keep
/// the headword order.
pub fn auto_detect_false_friends(
    jp_dictionary: &MeaningDictionary,
    cn_dictionary: &MeaningDictionary,
    thresholds: &SimilarityThresholds,
) -> Vec<FalseFriend> {
    let mut candidates: Vec<FalseFriend> = Vec::new();
    let mut compared = 0usize;

    for word in jp_dictionary.shared_headwords(cn_dictionary) {
        let (jp, cn) = match (jp_dictionary.get(word), cn_dictionary.get(word)) {
            (Some(jp), Some(cn)) => (jp, cn),
            _ => continue,
        };
        compared += 1;

        let similarity = meaning_similarity(&jp.meanings, &cn.meanings);
        let classification = match derive_divergence(similarity, thresholds) {
            Some(c) => c,
            None => continue,
        };
        debug!(word, similarity, "potential false friend");

        let mut ff = FalseFriend::new(
            format!("auto_{:04}", candidates.len()),
            word,
            classification,
            Source::Auto,
        );
        ff.jp_reading = jp.reading.clone();
        ff.jp_meanings = jp.meanings.clone();
        ff.cn_pinyin = cn.reading.clone();
        if !cn.variant.is_empty() && cn.variant != word {
            ff.cn_characters = cn.variant.clone();
        }
        ff.cn_meanings_simplified = cn.meanings.clone();
        ff.cn_meanings_traditional = cn.meanings.clone();
        ff.explanation = format!("Auto-detected: meaning similarity {:.2}", similarity);
        ff.confidence = 1.0 - similarity;
        candidates.push(ff);
    }

    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    info!(
        compared,
        detected = candidates.len(),
        "auto-detected potential false friends"
    );
    candidates
}
