use crate::detection::dictionary::{DictionaryEntry, MeaningDictionary};
use crate::error::LoadError;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

fn line_regex() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    // TRAD SIMP [pin1 yin1] /gloss 1/gloss 2/
    LINE_RE.get_or_init(|| {
        Regex::new(r"^(\S+)\s+(\S+)\s+\[([^\]]*)\]\s+/(.*)/\s*$").expect("static CEDICT pattern")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CedictStats {
    pub entries: usize,
    pub malformed_lines: usize,
}

/// Parses CC-CEDICT text. Each entry is indexed under its traditional and its
/// simplified headword, since Japanese forms may match either script.
pub fn parse_cedict(content: &str) -> (MeaningDictionary, CedictStats) {
    let mut dictionary = MeaningDictionary::new();
    let mut stats = CedictStats::default();

    for (idx, line) in content.lines().enumerate() {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let caps = match line_regex().captures(line_trimmed) {
            Some(caps) => caps,
            None => {
                debug!("CEDICT line {}: could not parse '{}'", idx + 1, line_trimmed);
                stats.malformed_lines += 1;
                continue;
            }
        };
        let traditional = caps.get(1).map_or("", |m| m.as_str());
        let simplified = caps.get(2).map_or("", |m| m.as_str());
        let pinyin = caps.get(3).map_or("", |m| m.as_str().trim());
        let glosses: Vec<String> = caps
            .get(4)
            .map_or("", |m| m.as_str())
            .split('/')
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .map(String::from)
            .collect();

        let entry = DictionaryEntry {
            reading: pinyin.to_string(),
            meanings: glosses,
            variant: if simplified != traditional { simplified.to_string() } else { String::new() },
        };
        dictionary.add(traditional, entry.clone());
        if simplified != traditional {
            dictionary.add(simplified, entry);
        }
        stats.entries += 1;
    }

    (dictionary, stats)
}

pub fn load_cedict(path: &Path) -> Result<MeaningDictionary, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (dictionary, stats) = parse_cedict(&content);
    info!(
        entries = stats.entries,
        malformed = stats.malformed_lines,
        headwords = dictionary.size(),
        "loaded CC-CEDICT from {}",
        path.display()
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# CC-CEDICT
#! version=1
手紙 手纸 [shou3 zhi3] /toilet paper/
愛人 爱人 [ai4 ren5] /spouse/husband/wife/
先生 先生 [xian1 sheng5] /teacher/mister/
先生 先生 [xian1 sheng5] /husband/
this line is broken
";

    #[test]
    fn indexes_both_scripts() {
        let (dict, stats) = parse_cedict(SAMPLE);
        assert_eq!(stats.entries, 4);
        assert_eq!(stats.malformed_lines, 1);

        let trad = dict.get("愛人").unwrap();
        assert_eq!(trad.meanings, vec!["spouse", "husband", "wife"]);
        assert_eq!(trad.reading, "ai4 ren5");
        assert_eq!(trad.variant, "爱人");
        assert_eq!(dict.get("爱人").unwrap().meanings, trad.meanings);
    }

    #[test]
    fn repeated_headwords_accumulate_meanings() {
        let (dict, _) = parse_cedict(SAMPLE);
        let entry = dict.get("先生").unwrap();
        assert_eq!(entry.meanings, vec!["teacher", "mister", "husband"]);
        assert_eq!(entry.variant, "");
    }
}
