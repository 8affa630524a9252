//*** START FILE: src/dataset_io.rs ***//
use crate::error::{LoadError, WriteError};
use crate::types::false_friend::{Affects, Category, Classification, FalseFriend, Severity, Source};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

pub const DATASET_VERSION: &str = "3.0";
const DATASET_DESCRIPTION: &str = "Expanded false friends database";

/// Fields the consuming app does not model; stripped unless provenance is requested.
const PROVENANCE_FIELDS: [&str; 3] = ["source", "confidence", "needs_review"];

/// The curated file is either `{ "false_friends": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CuratedFile {
    Wrapped { false_friends: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

fn default_type() -> u8 {
    4
}

fn default_category() -> Category {
    Category::TrueDivergence
}

fn default_severity() -> Severity {
    Severity::Important
}

/// One hand-curated entry as stored on disk. Older files only carry a single
/// `cn_meanings` list for both scripts.
#[derive(Deserialize, Debug)]
struct CuratedEntry {
    id: String,
    characters: String,
    #[serde(rename = "type", default = "default_type")]
    kind: u8,
    #[serde(default = "default_category")]
    category: Category,
    #[serde(default = "default_severity")]
    severity: Severity,
    #[serde(default)]
    affects: Affects,
    #[serde(default)]
    jp_reading: String,
    #[serde(default)]
    jp_meanings: Vec<String>,
    #[serde(default)]
    jp_example: String,
    #[serde(default)]
    jp_example_translation: String,
    #[serde(default)]
    cn_pinyin: String,
    #[serde(default)]
    cn_characters: String,
    #[serde(default)]
    cn_meanings: Vec<String>,
    cn_meanings_simplified: Option<Vec<String>>,
    cn_meanings_traditional: Option<Vec<String>>,
    #[serde(default)]
    cn_example: String,
    #[serde(default)]
    cn_example_translation: String,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    mnemonic_tip: String,
    #[serde(default)]
    traditional_note: String,
    #[serde(default)]
    merged_from: Vec<String>,
    #[serde(default)]
    shared_meanings: Vec<String>,
    #[serde(default)]
    jp_only_meanings: Vec<String>,
    #[serde(default)]
    cn_only_meanings: Vec<String>,
}

impl CuratedEntry {
    fn into_false_friend(self) -> FalseFriend {
        let classification = Classification {
            kind: self.kind,
            severity: self.severity,
            category: self.category,
        };
        let mut ff = FalseFriend::new(self.id, self.characters, classification, Source::Curated);
        ff.affects = self.affects;
        ff.jp_reading = self.jp_reading;
        ff.jp_meanings = self.jp_meanings;
        ff.jp_example = self.jp_example;
        ff.jp_example_translation = self.jp_example_translation;
        ff.cn_pinyin = self.cn_pinyin;
        ff.cn_characters = self.cn_characters;
        ff.cn_meanings_simplified = self
            .cn_meanings_simplified
            .unwrap_or_else(|| self.cn_meanings.clone());
        ff.cn_meanings_traditional = self.cn_meanings_traditional.unwrap_or(self.cn_meanings);
        ff.cn_example = self.cn_example;
        ff.cn_example_translation = self.cn_example_translation;
        ff.explanation = self.explanation;
        ff.mnemonic_tip = self.mnemonic_tip;
        ff.traditional_note = self.traditional_note;
        ff.merged_from = self.merged_from;
        ff.shared_meanings = self.shared_meanings;
        ff.jp_only_meanings = self.jp_only_meanings;
        ff.cn_only_meanings = self.cn_only_meanings;
        // Curated data is authoritative whatever the file says.
        ff.confidence = 1.0;
        ff.needs_review = false;
        ff
    }
}

/// Decodes curated entries one by one; a malformed entry is logged and
/// skipped instead of failing the whole file.
pub fn parse_curated_entries(entries: Vec<serde_json::Value>) -> (Vec<FalseFriend>, usize) {
    let mut false_friends = Vec::with_capacity(entries.len());
    let mut skipped = 0;

    for (index, value) in entries.into_iter().enumerate() {
        let ff = match serde_json::from_value::<CuratedEntry>(value) {
            Ok(entry) => entry.into_false_friend(),
            Err(e) => {
                warn!("Curated entry #{}: {}. Skipping.", index, e);
                skipped += 1;
                continue;
            }
        };
        if let Err(e) = ff.validate() {
            warn!("Curated entry #{}: {}. Skipping.", index, e);
            skipped += 1;
            continue;
        }
        false_friends.push(ff);
    }

    (false_friends, skipped)
}

/// Loads the hand-curated false friends.
pub fn load_curated_false_friends(file_path: &Path) -> Result<Vec<FalseFriend>, LoadError> {
    let file = File::open(file_path).map_err(|source| LoadError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let parsed: CuratedFile = serde_json::from_reader(reader).map_err(|source| LoadError::Json {
        path: file_path.to_path_buf(),
        source,
    })?;
    let entries = match parsed {
        CuratedFile::Wrapped { false_friends } => false_friends,
        CuratedFile::Bare(entries) => entries,
    };

    let (false_friends, skipped) = parse_curated_entries(entries);
    info!(
        loaded = false_friends.len(),
        skipped,
        "loaded curated entries from {}",
        file_path.display()
    );
    Ok(false_friends)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Keep `source`, `confidence` and `needs_review` in the output.
    pub include_provenance: bool,
}

#[derive(Serialize)]
struct DatasetMetadata {
    version: &'static str,
    description: &'static str,
    total_entries: usize,
    categories: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct DatasetFile {
    metadata: DatasetMetadata,
    false_friends: Vec<serde_json::Value>,
}

fn build_dataset(
    false_friends: &[FalseFriend],
    options: WriteOptions,
) -> Result<DatasetFile, serde_json::Error> {
    let categories = Category::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), serde_json::Value::from(c.description())))
        .collect();

    let mut entries = Vec::with_capacity(false_friends.len());
    for ff in false_friends {
        let mut value = serde_json::to_value(ff)?;
        if !options.include_provenance {
            if let Some(obj) = value.as_object_mut() {
                for field in PROVENANCE_FIELDS {
                    obj.remove(field);
                }
            }
        }
        entries.push(value);
    }

    Ok(DatasetFile {
        metadata: DatasetMetadata {
            version: DATASET_VERSION,
            description: DATASET_DESCRIPTION,
            total_entries: false_friends.len(),
            categories,
        },
        false_friends: entries,
    })
}

/// Saves the merged dataset in the shape the app expects. The file is written
/// to a temp file next to the target and renamed into place.
pub fn save_false_friends(
    false_friends: &[FalseFriend],
    file_path: &Path,
    options: WriteOptions,
) -> Result<(), WriteError> {
    let io_err = |source: std::io::Error| WriteError::Io {
        path: file_path.to_path_buf(),
        source,
    };
    let ser_err = |source: serde_json::Error| WriteError::Serialize {
        path: file_path.to_path_buf(),
        source,
    };

    let dataset = build_dataset(false_friends, options).map_err(ser_err)?;

    let parent_dir = file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(io_err)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, &dataset).map_err(ser_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }
    temp_file.persist(file_path).map_err(|e| io_err(e.error))?;

    info!("Saved {} entries to {}", false_friends.len(), file_path.display());
    Ok(())
}

//*** END FILE: src/dataset_io.rs ***//
