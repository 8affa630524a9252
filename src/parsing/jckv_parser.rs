//*** START FILE: src/parsing/jckv_parser.rs ***//
use crate::classification::classifier::{CodeEncoding, ComparisonPattern};
use crate::error::LoadError;
use crate::types::false_friend::{FalseFriend, Source, MISSING_SENTINEL};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

// Column indices (0-based) of the JCKV v3 sheet, as exported to TSV
const COL_HEADWORD: usize = 2; // 見出し語彙素, preferred
const COL_STANDARD: usize = 3; // 標準的(新聞)表記, often kana, fallback only
const COL_READING: usize = 5; // 標準的読み方（カタカナ）
const COL_CN_CHARS: usize = 8; // 中国語表記
const COL_PINYIN: usize = 9; // 中国語ピンイン表記
const COL_PATTERN: usize = 10; // Ver.3.0 意味対応
const COL_SHARED_MEANING: usize = 13; // 日本語と中国語に共通の意味
const COL_JP_ONLY: usize = 15; // 日本語のみに存在する意味
const COL_CN_ONLY: usize = 17; // 中国語のみに存在する意味

/// Per-pattern tallies of one JCKV extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JckvStats {
    pub rows_seen: usize,
    pub japanese_extra: usize,
    pub chinese_extra: usize,
    pub both_extra: usize,
    pub divergent: usize,
    pub skipped_same: usize,
    pub skipped_no_cn: usize,
    pub skipped_unrecognized: usize,
    pub skipped_malformed: usize,
    /// Rows whose kanji headword was missing and fell back to the standard form.
    pub hiragana_only: usize,
}

impl JckvStats {
    pub fn extracted(&self) -> usize {
        self.japanese_extra + self.chinese_extra + self.both_extra + self.divergent
    }

    fn count_pattern(&mut self, pattern: ComparisonPattern) {
        match pattern {
            ComparisonPattern::JapaneseExtra => self.japanese_extra += 1,
            ComparisonPattern::ChineseExtra => self.chinese_extra += 1,
            ComparisonPattern::BothExtra => self.both_extra += 1,
            ComparisonPattern::Divergent => self.divergent += 1,
            ComparisonPattern::Same => self.skipped_same += 1,
            ComparisonPattern::NoCounterpart => self.skipped_no_cn += 1,
        }
    }

    pub fn log_summary(&self) {
        info!("=== JCKV Extraction Statistics ===");
        info!("Total false friends extracted: {}", self.extracted());
        info!("  ≠ (completely different, critical): {}", self.divergent);
        info!("  ＞ (JP has extra meanings, important): {}", self.japanese_extra);
        info!("  ＜ (CN has extra meanings, important): {}", self.chinese_extra);
        info!("  ＞＜ (both have unique, important): {}", self.both_extra);
        info!("Skipped:");
        info!("  ＝ (same meaning): {}", self.skipped_same);
        info!("  φ/-- (no Chinese equivalent): {}", self.skipped_no_cn);
        info!("  unrecognized pattern: {}", self.skipped_unrecognized);
        info!("  malformed rows: {}", self.skipped_malformed);
        info!("Entries with hiragana fallback (no kanji headword): {}", self.hiragana_only);
    }
}

#[derive(Debug, Clone, Default)]
pub struct JckvExtraction {
    pub records: Vec<FalseFriend>,
    pub stats: JckvStats,
}

/// Splits a TSV export into rows. Cells quoted with `"` may contain tabs and
/// newlines; `""` inside quotes is a literal quote. Returns the 1-based line
/// number each row starts on.
fn split_tsv_rows(content: &str) -> Vec<(usize, Vec<String>)> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line_no = 1;
    let mut row_start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if cell.is_empty() => in_quotes = true,
            '\t' if !in_quotes => row.push(std::mem::take(&mut cell)),
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
                rows.push((row_start, std::mem::take(&mut row)));
                line_no += 1;
                row_start = line_no;
            }
            '\n' => {
                cell.push(c);
                line_no += 1;
            }
            _ => cell.push(c),
        }
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push((row_start, row));
    }
    rows
}

/// Trimmed cell text; out-of-range cells and pandas-style `nan` come back empty.
fn cell(row: &[String], idx: usize) -> &str {
    match row.get(idx).map(|s| s.trim()) {
        Some("nan") | None => "",
        Some(s) => s,
    }
}

fn is_missing(value: &str) -> bool {
    value.is_empty() || value == MISSING_SENTINEL
}

fn non_empty_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

fn explanation_for(pattern: ComparisonPattern, jp_only: &str, cn_only: &str) -> String {
    match pattern {
        ComparisonPattern::Divergent => {
            format!("Completely different meanings: JP '{}' vs CN '{}'", jp_only, cn_only)
        }
        ComparisonPattern::JapaneseExtra => format!("Japanese has additional meaning: {}", jp_only),
        ComparisonPattern::ChineseExtra => format!("Chinese has additional meaning: {}", cn_only),
        _ => format!("Both languages have unique meanings. JP: {}; CN: {}", jp_only, cn_only),
    }
}

/// Converts the JCKV comparison table (日中対照漢字語データベース v3.0, TSV export)
/// into `FalseFriend` records. The first row is the header.
///
/// Only the four false-friend patterns produce records. Rows with a same-meaning
/// or no-counterpart code, an unknown code, no Chinese form, or too few columns
/// are skipped and counted; nothing in a single row aborts the batch.
pub fn parse_jckv_table(content: &str) -> JckvExtraction {
    let mut extraction = JckvExtraction::default();
    let stats = &mut extraction.stats;
    let mut entry_num = 0usize;

    for (line_no, row) in split_tsv_rows(content).into_iter().skip(1) {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        stats.rows_seen += 1;
        if row.len() <= COL_PATTERN {
            debug!("Row {}: only {} columns, skipping", line_no, row.len());
            stats.skipped_malformed += 1;
            continue;
        }

        let code = cell(&row, COL_PATTERN);
        let pattern = match CodeEncoding::detect(code).normalize(code) {
            Some(p) => p,
            None => {
                debug!("Row {}: unrecognized pattern {:?}", line_no, code);
                stats.skipped_unrecognized += 1;
                continue;
            }
        };
        let classification = match pattern.classification() {
            Some(c) => c,
            None => {
                stats.count_pattern(pattern);
                continue;
            }
        };

        let headword = cell(&row, COL_HEADWORD);
        let standard_form = cell(&row, COL_STANDARD);
        let characters = if is_missing(headword) { standard_form } else { headword };
        if is_missing(characters) {
            warn!("Row {}: no headword or standard form, skipping", line_no);
            stats.skipped_malformed += 1;
            continue;
        }

        if is_missing(headword) {
            stats.hiragana_only += 1;
        }

        let cn_chars = cell(&row, COL_CN_CHARS);
        if is_missing(cn_chars) {
            stats.skipped_no_cn += 1;
            continue;
        }

        let shared = cell(&row, COL_SHARED_MEANING);
        let jp_only = cell(&row, COL_JP_ONLY);
        let cn_only = cell(&row, COL_CN_ONLY);

        let jp_meanings: Vec<String> = [shared, jp_only]
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| m.to_string())
            .collect();
        let cn_meanings: Vec<String> = [shared, cn_only]
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| m.to_string())
            .collect();

        let mut ff = FalseFriend::new(
            format!("jckv_{:04}", entry_num + 1),
            characters,
            classification,
            Source::Jckv,
        );
        ff.jp_reading = cell(&row, COL_READING).to_string();
        ff.jp_meanings = jp_meanings;
        ff.cn_pinyin = cell(&row, COL_PINYIN)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if cn_chars != characters {
            ff.cn_characters = cn_chars.to_string();
        }
        ff.cn_meanings_simplified = cn_meanings.clone();
        ff.cn_meanings_traditional = cn_meanings;
        ff.explanation = explanation_for(pattern, jp_only, cn_only);
        ff.shared_meanings = non_empty_list(shared);
        ff.jp_only_meanings = non_empty_list(jp_only);
        ff.cn_only_meanings = non_empty_list(cn_only);

        if let Err(e) = ff.validate() {
            warn!("Row {}: {}", line_no, e);
            stats.skipped_malformed += 1;
            continue;
        }

        entry_num += 1;
        stats.count_pattern(pattern);
        extraction.records.push(ff);
    }

    extraction
}

pub fn load_jckv_table(path: &Path) -> Result<JckvExtraction, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Processing JCKV table from {}", path.display());
    let extraction = parse_jckv_table(&content);
    extraction.stats.log_summary();
    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::false_friend::{Category, Severity};

    #[allow(clippy::too_many_arguments)]
    fn row(
        headword: &str,
        standard: &str,
        reading: &str,
        cn: &str,
        pinyin: &str,
        code: &str,
        shared: &str,
        jp_only: &str,
        cn_only: &str,
    ) -> String {
        let mut cols = vec![String::new(); 18];
        cols[0] = "1".into();
        cols[COL_HEADWORD] = headword.into();
        cols[COL_STANDARD] = standard.into();
        cols[COL_READING] = reading.into();
        cols[COL_CN_CHARS] = cn.into();
        cols[COL_PINYIN] = pinyin.into();
        cols[COL_PATTERN] = code.into();
        cols[COL_SHARED_MEANING] = shared.into();
        cols[COL_JP_ONLY] = jp_only.into();
        cols[COL_CN_ONLY] = cn_only.into();
        cols.join("\t")
    }

    fn table(rows: &[String]) -> String {
        let mut out = String::from("no\tid\t見出し語彙素\t標準的表記\n");
        for r in rows {
            out.push_str(r);
            out.push('\n');
        }
        out
    }

    #[test]
    fn extracts_divergent_row() {
        let content = table(&[row(
            "手紙", "手紙", "テガミ", "手纸", "shou3 zhi3", "≠", "", "letter", "toilet paper"
        )]);
        let extraction = parse_jckv_table(&content);

        assert_eq!(extraction.records.len(), 1);
        let ff = &extraction.records[0];
        assert_eq!(ff.id, "jckv_0001");
        assert_eq!(ff.characters, "手紙");
        assert_eq!(
            (ff.kind, &ff.severity, ff.category),
            (4, &Severity::Critical, Category::TrueDivergence)
        );
        assert_eq!(ff.jp_reading, "テガミ");
        assert_eq!(ff.cn_pinyin, "shou3 zhi3");
        assert_eq!(ff.cn_characters, "手纸");
        assert_eq!(ff.jp_meanings, vec!["letter"]);
        assert_eq!(ff.cn_meanings_simplified, vec!["toilet paper"]);
        assert_eq!(
            ff.explanation,
            "Completely different meanings: JP 'letter' vs CN 'toilet paper'"
        );
        assert_eq!(ff.confidence, 0.9);
        assert!(ff.needs_review);
        assert_eq!(extraction.stats.divergent, 1);
    }

    #[test]
    fn shared_meaning_leads_both_meaning_lists() {
        let content = table(&[row(
            "先生", "先生", "センセイ", "先生", "xian1 sheng", "＞＜", "teacher", "doctor", "mister"
        )]);
        let ff = &parse_jckv_table(&content).records[0];
        assert_eq!(ff.kind, 3);
        assert_eq!(ff.jp_meanings, vec!["teacher", "doctor"]);
        assert_eq!(ff.cn_meanings_traditional, vec!["teacher", "mister"]);
        assert_eq!(ff.shared_meanings, vec!["teacher"]);
        assert_eq!(ff.cn_characters, "", "identical Chinese form is not repeated");
        assert_eq!(ff.explanation, "Both languages have unique meanings. JP: doctor; CN: mister");
    }

    #[test]
    fn skips_same_no_counterpart_and_unknown_codes() {
        let content = table(&[
            row("学生", "学生", "ガクセイ", "学生", "xue2 sheng", "＝", "student", "", ""),
            row("着物", "着物", "キモノ", "--", "", "φ", "", "", ""),
            row("大丈夫", "大丈夫", "ダイジョウブ", "大丈夫", "", "？", "", "", ""),
            row("新聞", "新聞", "シンブン", "--", "", "≠", "", "newspaper", "news"),
        ]);
        let extraction = parse_jckv_table(&content);
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.stats.skipped_same, 1);
        assert_eq!(extraction.stats.skipped_no_cn, 2);
        assert_eq!(extraction.stats.skipped_unrecognized, 1);
    }

    #[test]
    fn falls_back_to_standard_form_when_headword_missing() {
        let content = table(&[row("--", "やはり", "ヤハリ", "也", "ye3", "＜", "", "", "also")]);
        let extraction = parse_jckv_table(&content);
        assert_eq!(extraction.records[0].characters, "やはり");
        assert_eq!(extraction.stats.hiragana_only, 1);
    }

    #[test]
    fn fallback_is_counted_even_without_chinese_form() {
        let content = table(&[
            row("--", "やはり", "ヤハリ", "也", "ye3", "＜", "", "", "also"),
            row("--", "ちょっと", "チョット", "--", "", "≠", "", "a little", ""),
        ]);
        let extraction = parse_jckv_table(&content);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.stats.hiragana_only, 2);
        assert_eq!(extraction.stats.skipped_no_cn, 1);
    }

    #[test]
    fn short_and_headless_rows_are_malformed_not_fatal() {
        let mut content = table(&[
            row("--", "--", "", "汽车", "qi4 che1", "≠", "", "train", "car"),
            row("汽車", "汽車", "キシャ", "汽车", "qi4 che1", "≠", "", "train", "car"),
        ]);
        content.push_str("1\t2\t3\n");
        let extraction = parse_jckv_table(&content);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].id, "jckv_0001");
        assert_eq!(extraction.stats.skipped_malformed, 2);
    }

    #[test]
    fn quoted_cells_keep_tabs_and_newlines() {
        let mut cols = vec![String::new(); 18];
        cols[COL_HEADWORD] = "結束".into();
        cols[COL_CN_CHARS] = "结束".into();
        cols[COL_PINYIN] = "\"jie2\nshu4\"".into();
        cols[COL_PATTERN] = "≠".into();
        cols[COL_JP_ONLY] = "\"unity\tsolidarity\"".into();
        cols[COL_CN_ONLY] = "end".into();
        let content = table(&[cols.join("\t")]);

        let ff = &parse_jckv_table(&content).records[0];
        assert_eq!(ff.cn_pinyin, "jie2 shu4");
        assert_eq!(ff.jp_only_meanings, vec!["unity\tsolidarity"]);
    }

    #[test]
    fn nan_cells_read_as_empty() {
        let content = table(&[row(
            "勉強", "勉強", "nan", "勉强", "nan", "＞", "nan", "study", "nan"
        )]);
        let ff = &parse_jckv_table(&content).records[0];
        assert_eq!(ff.jp_reading, "");
        assert_eq!(ff.cn_pinyin, "");
        assert!(ff.shared_meanings.is_empty());
        assert_eq!(ff.jp_meanings, vec!["study"]);
    }

    #[test]
    fn alphabetic_codes_are_accepted() {
        let content = table(&[row(
            "丈夫", "丈夫", "ジョウブ", "丈夫", "zhang4 fu", "D", "", "sturdy", "husband"
        )]);
        let extraction = parse_jckv_table(&content);
        assert_eq!(extraction.records[0].kind, 4);
    }
}
//*** END FILE: src/parsing/jckv_parser.rs ***//
