//! CC-CEDICT source text parser.
//!
//! This module converts the flat, line-oriented CC-CEDICT text format into an
//! ordered sequence of [`Entry`] records. It handles:
//! - Comment (`#`) and blank line skipping
//! - The fixed-offset line grammar
//! - Bulk loading of a whole dictionary file
//!
//! Data lines follow this format:
//!
//! ```text
//! TRADITIONAL SIMPLIFIED [PINYIN] /ENGLISH 1/ENGLISH 2/
//! ```
//!
//! Fields are located by fixed delimiter offsets (first space, second space,
//! first `[`/`]` pair, first `/`, trailing `/`), not by a general tokenizer.
//! The definition field is stored as one string; internal `/` separators are
//! kept as-is.
//!
//! # Examples
//!
//! ```
//! use cedict::parser;
//!
//! let text = "# CC-CEDICT sample\n愛 爱 [ai4] /to love/affection/\n";
//! let entries = parser::parse(text)?;
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].traditional, "愛");
//! assert_eq!(entries[0].definition, "to love/affection");
//! # Ok::<(), cedict::CedictError>(())
//! ```

use std::fs;
use std::path::Path;

use log::*;

use crate::entry::Entry;
use crate::{Result, CedictError};

/// Parses CC-CEDICT source text into a list of entries.
///
/// Produces one entry per data line, in source order. Lines that are empty or
/// whose first character is `#` are skipped and produce no entry.
///
/// # Errors
///
/// Returns [`CedictError::MalformedLine`] for any data line missing one of
/// the grammar's delimiters. Field values are never silently repaired; a
/// broken line is reported with its 1-based line number instead.
pub fn parse(text: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (i, line) in text.lines().enumerate() {
        // ignore non-entry lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        entries.push(parse_line(line, i + 1)?);
    }
    debug!("parsed {} dictionary entries", entries.len());
    Ok(entries)
}

/// Reads the file at `path` and parses it as CC-CEDICT text.
///
/// The file is bulk-read as UTF-8 before any parsing begins.
///
/// # Errors
///
/// Returns [`CedictError::Io`] if the file cannot be read, or
/// [`CedictError::MalformedLine`] for broken data lines (see [`parse`]).
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let entries = parse(&text)?;
    info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

// Delimiter offsets on a single data line. All delimiters are ASCII, so byte
// offsets from `find` always land on char boundaries.
fn parse_line(line: &str, line_no: usize) -> Result<Entry> {
    let first_space = line
        .find(' ')
        .ok_or_else(|| CedictError::malformed_line(line_no, "missing space after traditional headword"))?;
    let second_space = line[first_space + 1..]
        .find(' ')
        .map(|i| first_space + 1 + i)
        .ok_or_else(|| CedictError::malformed_line(line_no, "missing space after simplified headword"))?;
    let left_bracket = line
        .find('[')
        .ok_or_else(|| CedictError::malformed_line(line_no, "missing '[' before pinyin"))?;
    let right_bracket = line
        .find(']')
        .filter(|&i| i > left_bracket)
        .ok_or_else(|| CedictError::malformed_line(line_no, "missing ']' after pinyin"))?;
    let first_slash = line
        .find('/')
        .ok_or_else(|| CedictError::malformed_line(line_no, "missing '/' before definitions"))?;

    // The definition runs from just after the first '/' up to the trailing
    // '/'; internal separators stay embedded in the stored string.
    let definition = line[first_slash + 1..]
        .strip_suffix('/')
        .ok_or_else(|| CedictError::malformed_line(line_no, "missing trailing '/' after definitions"))?;

    Ok(Entry::new(
        &line[..first_space],
        &line[first_space + 1..second_space],
        &line[left_bracket + 1..right_bracket],
        definition,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# CC-CEDICT
# comment line
愛 爱 [ai4] /to love/affection/

愛人 爱人 [ai4 ren2] /sweetheart/spouse/
";

    #[test]
    fn test_parse_fields() {
        let entries = parse(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].traditional, "愛");
        assert_eq!(entries[0].simplified, "爱");
        assert_eq!(entries[0].pinyin, "ai4");
        assert_eq!(entries[0].definition, "to love/affection");

        assert_eq!(entries[1].traditional, "愛人");
        assert_eq!(entries[1].simplified, "爱人");
        assert_eq!(entries[1].pinyin, "ai4 ren2");
        assert_eq!(entries[1].definition, "sweetheart/spouse");
    }

    #[test]
    fn test_comment_and_blank_skipping_idempotence() {
        // Parsing with comments/blanks interspersed must equal parsing the
        // same data lines with those lines removed.
        let stripped = "愛 爱 [ai4] /to love/affection/\n愛人 爱人 [ai4 ren2] /sweetheart/spouse/\n";
        assert_eq!(parse(SAMPLE).unwrap(), parse(stripped).unwrap());
    }

    #[test]
    fn test_source_order_preserved() {
        let text = "乙 乙 [yi3] /second/\n甲 甲 [jia3] /first/\n";
        let entries = parse(text).unwrap();
        assert_eq!(entries[0].traditional, "乙");
        assert_eq!(entries[1].traditional, "甲");
    }

    #[test]
    fn test_malformed_lines_reported_with_line_no() {
        let test_cases = [
            // (text, expected 1-based line number of the broken line)
            ("愛\n", 1),                               // no spaces at all
            ("# ok\n愛 爱 ai4] /x/\n", 2),             // missing '['
            ("愛 爱 [ai4 /x/\n", 1),                   // missing ']'
            ("愛 爱 [ai4]\n", 1),                      // missing '/'
            ("愛 爱 [ai4] /x\n", 1),                   // missing trailing '/'
            ("愛 爱[ai4]/x/\n", 1),                    // missing second space
        ];

        for (text, expected_line) in test_cases {
            let err = parse(text).unwrap_err();
            assert!(err.is_malformed_line(), "expected MalformedLine for {:?}", text);
            match err {
                CedictError::MalformedLine { line_no, .. } => {
                    assert_eq!(line_no, expected_line, "line number for {:?}", text);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_file("/nonexistent/cedict_ts.u8").unwrap_err();
        assert!(matches!(err, CedictError::Io { .. }));
    }

    #[test]
    fn test_pinyin_with_internal_spaces() {
        let entries = parse("一起 一起 [yi1 qi3] /together/in the same place/\n").unwrap();
        assert_eq!(entries[0].pinyin, "yi1 qi3");
        assert_eq!(entries[0].definition, "together/in the same place");
    }
}
