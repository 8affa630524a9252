//*** START FILE: src/pipeline.rs ***//
use crate::classification::similarity::SimilarityThresholds;
use crate::dataset_io::{load_curated_false_friends, save_false_friends, WriteOptions};
use crate::detection::auto_detect::auto_detect_false_friends;
use crate::error::ExpandError;
use crate::merge::{merge_with_summary, MergeSummary};
use crate::parsing::{cedict_parser, jckv_parser, jmdict_parser};
use crate::report::DatasetStats;
use crate::types::false_friend::FalseFriend;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything one expansion run needs, after config and CLI are resolved.
#[derive(Debug, Clone)]
pub struct ExpansionArgs {
    pub curated_path: PathBuf,
    pub jckv_path: Option<PathBuf>,
    pub auto_detect: bool,
    pub jmdict_path: Option<PathBuf>,
    pub cedict_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub thresholds: SimilarityThresholds,
    pub write_options: WriteOptions,
}

#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    /// All three sources were empty; nothing was written.
    NothingToMerge,
    Written {
        summary: MergeSummary,
        stats: DatasetStats,
        output_path: PathBuf,
    },
}

fn load_curated(args: &ExpansionArgs) -> Result<Vec<FalseFriend>, ExpandError> {
    if !args.curated_path.exists() {
        info!("No curated file at {}, continuing without it", args.curated_path.display());
        return Ok(Vec::new());
    }
    let curated = load_curated_false_friends(&args.curated_path)?;
    info!("Loaded {} curated entries", curated.len());
    Ok(curated)
}

fn load_jckv(args: &ExpansionArgs) -> Result<Vec<FalseFriend>, ExpandError> {
    match &args.jckv_path {
        Some(path) if path.exists() => Ok(jckv_parser::load_jckv_table(path)?.records),
        Some(path) => {
            warn!("JCKV table {} not found, continuing without it", path.display());
            Ok(Vec::new())
        }
        None => Ok(Vec::new()),
    }
}

fn load_auto(args: &ExpansionArgs) -> Result<Vec<FalseFriend>, ExpandError> {
    if !args.auto_detect {
        return Ok(Vec::new());
    }
    let (jmdict_path, cedict_path) = match (&args.jmdict_path, &args.cedict_path) {
        (Some(j), Some(c)) => (j, c),
        _ => {
            warn!("Auto-detection needs both JMdict and CEDICT paths, skipping it");
            return Ok(Vec::new());
        }
    };
    let jp_dictionary = jmdict_parser::load_jmdict(jmdict_path)?;
    let cn_dictionary = cedict_parser::load_cedict(cedict_path)?;
    Ok(auto_detect_false_friends(&jp_dictionary, &cn_dictionary, &args.thresholds))
}

/// Loads every available source, merges them and writes the dataset.
///
/// Missing optional sources count as empty. If all three end up empty the
/// run is a no-op and nothing is written.
pub fn run_expansion(args: &ExpansionArgs) -> Result<PipelineOutcome, ExpandError> {
    let curated = load_curated(args)?;
    let jckv = load_jckv(args)?;
    let auto = load_auto(args)?;

    if curated.is_empty() && jckv.is_empty() && auto.is_empty() {
        warn!("No data to process. Provide a curated file, a JCKV table, or enable auto-detection");
        return Ok(PipelineOutcome::NothingToMerge);
    }

    let (merged, summary) = merge_with_summary(curated, jckv, auto);
    let stats = DatasetStats::from_records(&merged);

    save_false_friends(&merged, &args.output_path, args.write_options)?;
    stats.log_summary();

    Ok(PipelineOutcome::Written {
        summary,
        stats,
        output_path: args.output_path.clone(),
    })
}
//*** END FILE: src/pipeline.rs ***//
