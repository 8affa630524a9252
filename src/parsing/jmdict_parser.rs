use crate::detection::dictionary::{DictionaryEntry, MeaningDictionary};
use crate::error::LoadError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

/// Either shape the processed JMdict export uses for a headword.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum JmdictValue {
    Meanings(Vec<String>),
    Entry {
        #[serde(default)]
        reading: String,
        #[serde(default)]
        meanings: Vec<String>,
    },
}

/// Builds the Japanese-side dictionary from a processed JMdict JSON object
/// (`{ "手紙": ["letter"], "先生": { "reading": "せんせい", "meanings": [...] } }`).
/// Headwords whose value has neither shape are skipped with a warning.
pub fn parse_jmdict_json(raw: BTreeMap<String, serde_json::Value>) -> (MeaningDictionary, usize) {
    let mut dictionary = MeaningDictionary::new();
    let mut skipped = 0;

    for (headword, value) in raw {
        let entry = match serde_json::from_value::<JmdictValue>(value) {
            Ok(JmdictValue::Meanings(meanings)) => DictionaryEntry {
                meanings,
                ..Default::default()
            },
            Ok(JmdictValue::Entry { reading, meanings }) => DictionaryEntry {
                reading,
                meanings,
                variant: String::new(),
            },
            Err(e) => {
                warn!("JMdict headword '{}' has an unexpected shape: {}", headword, e);
                skipped += 1;
                continue;
            }
        };
        dictionary.add(&headword, entry);
    }

    (dictionary, skipped)
}

pub fn load_jmdict(path: &Path) -> Result<MeaningDictionary, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let (dictionary, skipped) = parse_jmdict_json(raw);
    info!(
        headwords = dictionary.size(),
        skipped,
        "loaded JMdict from {}",
        path.display()
    );
    Ok(dictionary)
}
