use crate::classification::similarity::SimilarityThresholds;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "falsefriends.toml";

/// Default input/output locations. CLI flags override these.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PathsConfig {
    pub curated: PathBuf,
    pub jckv: Option<PathBuf>,
    pub jmdict: Option<PathBuf>,
    pub cedict: Option<PathBuf>,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            curated: PathBuf::from("false_friends_v2.json"),
            jckv: None,
            jmdict: None,
            cedict: None,
            output: PathBuf::from("output/false_friends_expanded.json"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub include_provenance: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub similarity: SimilarityThresholds,
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.similarity.validate()?;
        Ok(config)
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    Config::from_toml_str(&contents, file_path)
}

/// Like [`load_config_from_file`], but a missing file just means defaults.
pub fn load_config_or_default(file_path: &Path) -> Result<Config, ConfigError> {
    if !file_path.exists() {
        info!("No config at {}, using defaults", file_path.display());
        return Ok(Config::default());
    }
    load_config_from_file(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("", Path::new("test.toml")).unwrap();
        assert_eq!(config.similarity, SimilarityThresholds::default());
        assert_eq!(config.paths.curated, PathBuf::from("false_friends_v2.json"));
        assert!(config.paths.jckv.is_none());
        assert!(!config.output.include_provenance);
    }

    #[test]
    fn partial_sections_are_merged_with_defaults() {
        let toml = r#"
            [similarity]
            accept_below = 0.25

            [paths]
            jckv = "data/JKVC_ver3_0.tsv"

            [output]
            include_provenance = true
        "#;
        let config = Config::from_toml_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.similarity.accept_below, 0.25);
        assert_eq!(config.similarity.critical_below, 0.1);
        assert_eq!(config.paths.jckv, Some(PathBuf::from("data/JKVC_ver3_0.tsv")));
        assert_eq!(config.paths.output, PathBuf::from("output/false_friends_expanded.json"));
        assert!(config.output.include_provenance);
    }

    #[test]
    fn bad_thresholds_are_rejected() {
        let toml = "[similarity]\ncritical_below = 0.5\n";
        let err = Config::from_toml_str(toml, Path::new("test.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThresholds { .. }));
    }

    #[test]
    fn accept_threshold_may_sit_below_important() {
        let toml = "[similarity]\naccept_below = 0.15\n";
        let config = Config::from_toml_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.similarity.accept_below, 0.15);
        assert_eq!(config.similarity.important_below, 0.2);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config_or_default(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config.similarity, SimilarityThresholds::default());
    }
}
