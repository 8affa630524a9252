use crate::types::false_friend::FalseFriend;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Aggregate counts over a record list, for the operator log.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total: usize,
    pub by_severity: BTreeMap<String, usize>,
    pub by_source: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub needs_review: usize,
}

impl DatasetStats {
    pub fn from_records(records: &[FalseFriend]) -> Self {
        let mut stats = DatasetStats {
            total: records.len(),
            ..Default::default()
        };
        for ff in records {
            *stats.by_severity.entry(ff.severity.to_string()).or_insert(0) += 1;
            *stats.by_source.entry(ff.source.to_string()).or_insert(0) += 1;
            *stats.by_category.entry(ff.category.to_string()).or_insert(0) += 1;
            if ff.needs_review {
                stats.needs_review += 1;
            }
        }
        stats
    }

    pub fn log_summary(&self) {
        info!(total = self.total, needs_review = self.needs_review, "dataset statistics");
        info!("  by severity: {:?}", self.by_severity);
        info!("  by category: {:?}", self.by_category);
        info!("  by source: {:?}", self.by_source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::false_friend::{Category, Classification, Severity, Source};

    #[test]
    fn counts_are_grouped() {
        let divergent = Classification {
            kind: 4,
            severity: Severity::Critical,
            category: Category::TrueDivergence,
        };
        let scope = Classification {
            kind: 1,
            severity: Severity::Important,
            category: Category::ScopeDifference,
        };
        let records = vec![
            FalseFriend::new("ff_001", "愛人", divergent.clone(), Source::Curated),
            FalseFriend::new("jckv_0001", "手紙", divergent, Source::Jckv),
            FalseFriend::new("jckv_0002", "先生", scope, Source::Jckv),
        ];

        let stats = DatasetStats::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.needs_review, 2);
        assert_eq!(stats.by_severity.get("critical"), Some(&2));
        assert_eq!(stats.by_severity.get("important"), Some(&1));
        assert_eq!(stats.by_source.get("jckv"), Some(&2));
        assert_eq!(stats.by_category.get("scope_difference"), Some(&1));
    }

    #[test]
    fn empty_list_has_zero_counts() {
        assert_eq!(DatasetStats::from_records(&[]), DatasetStats::default());
    }
}
