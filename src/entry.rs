//! Dictionary entry data model.
//!
//! This module defines [`Entry`], the typed record produced by the parser for
//! each CC-CEDICT data line and attached to trie nodes by the index. An entry
//! carries:
//! - The traditional-script headword
//! - The simplified-script headword
//! - The romanized pronunciation (pinyin)
//! - The gloss, stored as one string with embedded `/` sense separators

use serde::{Deserialize, Serialize};

/// One parsed CC-CEDICT dictionary entry.
///
/// Entries are immutable once parsed. Several entries may share the same
/// headword (homographs with distinct pronunciations or glosses); the index
/// keeps all of them, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Traditional-script headword
    pub traditional: String,
    /// Simplified-script headword
    pub simplified: String,
    /// Romanized pronunciation, e.g. "ai4 ren2"
    pub pinyin: String,
    /// Gloss string; multiple senses stay collapsed into one string,
    /// separated by `/`
    pub definition: String,
}

impl Entry {
    pub fn new<S: Into<String>>(traditional: S, simplified: S, pinyin: S, definition: S) -> Self {
        Self {
            traditional: traditional.into(),
            simplified: simplified.into(),
            pinyin: pinyin.into(),
            definition: definition.into(),
        }
    }

    /// Iterates over the individual `/`-separated senses of the definition.
    ///
    /// The stored `definition` string is never split at parse time; this is a
    /// view for callers that want the senses one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cedict::Entry;
    ///
    /// let entry = Entry::new("愛", "爱", "ai4", "to love/affection");
    /// let senses: Vec<&str> = entry.senses().collect();
    /// assert_eq!(senses, ["to love", "affection"]);
    /// ```
    pub fn senses(&self) -> impl Iterator<Item = &str> {
        self.definition.split('/').filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senses_split() {
        let test_cases = [
            // (definition, expected senses)
            ("to love/affection", vec!["to love", "affection"]),
            ("sweetheart", vec!["sweetheart"]),
            ("", vec![]),
            ("a//b", vec!["a", "b"]),
        ];

        for (definition, expected) in test_cases {
            let entry = Entry::new("愛", "爱", "ai4", definition);
            let senses: Vec<&str> = entry.senses().collect();
            assert_eq!(senses, expected, "senses of {:?}", definition);
        }
    }

    #[test]
    fn test_json_round_trip() {
        let entry = Entry::new("愛人", "爱人", "ai4 ren2", "sweetheart/spouse");
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
