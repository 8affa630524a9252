use crate::types::false_friend::FalseFriend;
use std::collections::HashMap;
use tracing::{debug, info};

/// Input and output sizes of one merge, for the operator log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub curated: usize,
    pub jckv: usize,
    pub auto: usize,
    pub merged: usize,
}

/// Merges the three sources into one record per `characters`.
///
/// Trust order is curated > jckv > auto. Sources are applied lowest-trust
/// first so later inserts overwrite earlier ones. A jckv record about to replace
/// an existing one inherits its `jp_reading` and `cn_pinyin` when its own are
/// empty; curated records always win untouched.
///
/// The result is ordered by severity rank, then by `characters`.
pub fn merge_false_friends(
    curated: Vec<FalseFriend>,
    jckv: Vec<FalseFriend>,
    auto: Vec<FalseFriend>,
) -> Vec<FalseFriend> {
    merge_with_summary(curated, jckv, auto).0
}

pub fn merge_with_summary(
    curated: Vec<FalseFriend>,
    jckv: Vec<FalseFriend>,
    auto: Vec<FalseFriend>,
) -> (Vec<FalseFriend>, MergeSummary) {
    let mut summary = MergeSummary {
        curated: curated.len(),
        jckv: jckv.len(),
        auto: auto.len(),
        merged: 0,
    };

    let mut merged: HashMap<String, FalseFriend> =
        HashMap::with_capacity(curated.len() + jckv.len() + auto.len());

    for ff in auto {
        merged.insert(ff.characters.clone(), ff);
    }

    for mut ff in jckv {
        if let Some(existing) = merged.get(&ff.characters) {
            backfill_phonetics(&mut ff, existing);
        }
        merged.insert(ff.characters.clone(), ff);
    }

    for ff in curated {
        if let Some(replaced) = merged.insert(ff.characters.clone(), ff) {
            debug!(
                characters = %replaced.characters,
                replaced_id = %replaced.id,
                "curated entry supersedes generated one"
            );
        }
    }

    let mut result: Vec<FalseFriend> = merged.into_values().collect();
    sort_for_output(&mut result);

    summary.merged = result.len();
    info!(
        curated = summary.curated,
        jckv = summary.jckv,
        auto = summary.auto,
        total = summary.merged,
        "merged false friend sources"
    );
    (result, summary)
}

/// Copies the phonetic readings of the record being superseded into its
/// replacement wherever the replacement has none.
fn backfill_phonetics(incoming: &mut FalseFriend, existing: &FalseFriend) {
    if incoming.jp_reading.is_empty() && !existing.jp_reading.is_empty() {
        incoming.jp_reading = existing.jp_reading.clone();
    }
    if incoming.cn_pinyin.is_empty() && !existing.cn_pinyin.is_empty() {
        incoming.cn_pinyin = existing.cn_pinyin.clone();
    }
}

/// Severity first (critical, important, subtle, anything else), then
/// `characters`. Keys are unique after the merge, so the order is total.
pub fn sort_for_output(records: &mut [FalseFriend]) {
    records.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| a.characters.cmp(&b.characters))
    });
}
