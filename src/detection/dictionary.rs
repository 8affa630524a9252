//*** START FILE: src/detection/dictionary.rs ***//
use std::collections::BTreeMap;

/// One headword's data from a bilingual dictionary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Kana reading for JMdict, pinyin for CEDICT. May be empty.
    pub reading: String,
    pub meanings: Vec<String>,
    /// Other-script form of the headword (CEDICT simplified), if different.
    pub variant: String,
}

/// Headword → meanings, for one language side. Kept ordered so auto-detection
/// walks shared words deterministically.
#[derive(Debug, Default, Clone)]
pub struct MeaningDictionary {
    entries: BTreeMap<String, DictionaryEntry>,
}

impl MeaningDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry under `headword`. If the headword is already present the
    /// meanings are appended (duplicates dropped) and the first non-empty
    /// reading is kept. Empty headwords are ignored.
    pub fn add(&mut self, headword: &str, entry: DictionaryEntry) {
        let key = headword.trim();
        if key.is_empty() {
            return;
        }
        match self.entries.get_mut(key) {
            Some(existing) => {
                for meaning in entry.meanings {
                    if !existing.meanings.contains(&meaning) {
                        existing.meanings.push(meaning);
                    }
                }
                if existing.reading.is_empty() {
                    existing.reading = entry.reading;
                }
                if existing.variant.is_empty() {
                    existing.variant = entry.variant;
                }
            }
            None => {
                self.entries.insert(key.to_string(), entry);
            }
        }
    }

    pub fn get(&self, headword: &str) -> Option<&DictionaryEntry> {
        self.entries.get(headword.trim())
    }

    /// Returns the total number of headwords.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headwords present in both dictionaries, in sorted order.
    pub fn shared_headwords<'a>(
        &'a self,
        other: &'a MeaningDictionary,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .keys()
            .filter(move |k| other.entries.contains_key(*k))
            .map(String::as_str)
    }
}

//*** END FILE: src/detection/dictionary.rs ***//
