//*** START FILE: src/main.rs ***//
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

use false_friends::config::{self, DEFAULT_CONFIG_FILE};
use false_friends::dataset_io::WriteOptions;
use false_friends::pipeline::{run_expansion, ExpansionArgs, PipelineOutcome};

/// Expand the false friends database from the JCKV table, JMdict/CEDICT
/// auto-detection and the curated entries.
#[derive(Parser, Debug)]
#[command(name = "false-friends", version, about)]
struct Cli {
    /// Path to a TOML config (defaults to ./falsefriends.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to curated false friends JSON
    #[arg(long)]
    curated: Option<PathBuf>,

    /// Path to the JCKV table, exported from Excel as tab-separated text
    #[arg(long)]
    jckv: Option<PathBuf>,

    /// Auto-detect candidates from JMdict/CEDICT
    #[arg(long)]
    auto_detect: bool,

    /// Path to processed JMdict JSON
    #[arg(long)]
    jmdict: Option<PathBuf>,

    /// Path to CC-CEDICT text
    #[arg(long)]
    cedict: Option<PathBuf>,

    /// Output path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum similarity for an auto-detected pair to count as a false friend
    #[arg(long)]
    threshold: Option<f64>,

    /// Keep source/confidence/needs_review in the output
    #[arg(long)]
    include_provenance: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loaded = match &cli.config {
        Some(path) => config::load_config_from_file(path),
        None => config::load_config_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    };
    let mut project_config = loaded.context("Failed to load configuration")?;

    if let Some(threshold) = cli.threshold {
        project_config.similarity.accept_below = threshold;
        project_config
            .similarity
            .validate()
            .context("Invalid --threshold")?;
    }

    let paths = project_config.paths;
    let args = ExpansionArgs {
        curated_path: cli.curated.unwrap_or(paths.curated),
        jckv_path: cli.jckv.or(paths.jckv),
        auto_detect: cli.auto_detect,
        jmdict_path: cli.jmdict.or(paths.jmdict),
        cedict_path: cli.cedict.or(paths.cedict),
        output_path: cli.output.unwrap_or(paths.output),
        thresholds: project_config.similarity,
        write_options: WriteOptions {
            include_provenance: cli.include_provenance || project_config.output.include_provenance,
        },
    };

    match run_expansion(&args).context("Expansion run failed")? {
        PipelineOutcome::NothingToMerge => {}
        PipelineOutcome::Written { summary, output_path, .. } => {
            info!(
                "Merged: {} curated + {} JCKV + {} auto = {} total -> {}",
                summary.curated,
                summary.jckv,
                summary.auto,
                summary.merged,
                output_path.display()
            );
        }
    }
    Ok(())
}
//*** END FILE: src/main.rs ***//
