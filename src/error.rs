use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating `falsefriends.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid similarity thresholds: {reason}")]
    InvalidThresholds { reason: String },
}

/// Errors raised by the source loaders. Row-level problems never surface here;
/// they are skipped and counted by the loader instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON from {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize dataset for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A record that breaks one of the `FalseFriend` invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error("record {id:?} has no usable characters")]
    MissingCharacters { id: String },

    #[error("record {id:?} has type {kind}, expected 1..=4")]
    InvalidType { id: String, kind: u8 },

    #[error("record {id:?} pairs type {kind} with category {category}")]
    InconsistentCategory {
        id: String,
        kind: u8,
        category: String,
    },

    #[error("record {id:?} has confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { id: String, confidence: f64 },

    #[error("curated record {id:?} must have confidence 1.0 and needs_review=false")]
    CuratedNotAuthoritative { id: String },
}

/// Top-level error for a pipeline run.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
