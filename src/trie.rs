//! Character-trie dictionary index for CC-CEDICT entries.
//!
//! This module provides the main lookup structure of the crate. Each trie
//! node (except the root) is reached by one character, and holds the entries
//! whose indexed headword equals the character path from the root. The index
//! is keyed by either the traditional or the simplified headword, selected at
//! build time.
//!
//! Three lookup modes share one path-walk primitive:
//! - **Exact match**: entries whose headword equals the query
//! - **Starting with**: entries in the whole subtree under the query prefix
//! - **Prefixes of**: entries for every prefix of the query, for
//!   word-segmentation of running text
//!
//! # Examples
//!
//! ```
//! use cedict::{parser, Cedict, Script};
//!
//! let text = "愛 爱 [ai4] /to love/affection/\n愛人 爱人 [ai4 ren2] /sweetheart/spouse/\n";
//! let entries = parser::parse(text)?;
//! let dict = Cedict::build(entries, Script::Traditional);
//!
//! assert_eq!(dict.exact_match("愛").len(), 1);
//! assert_eq!(dict.starting_with("愛").len(), 2);
//! assert_eq!(dict.prefixes_of("愛人是").len(), 2);
//! # Ok::<(), cedict::CedictError>(())
//! ```

use std::path::Path;

use indexmap::IndexMap;
use log::*;

use crate::entry::Entry;
use crate::parser;
use crate::Result;

/// Position of an entry in the index-owned entry list.
pub type EntryNo = usize;

/// Which headword script keys the trie.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Script {
    /// Key by the traditional-script headword
    Traditional,
    /// Key by the simplified-script headword
    Simplified,
}

/// One node of the character trie.
///
/// `children` preserves first-insertion order, so subtree enumeration order
/// is determined by source order and is stable across rebuilds.
struct TrieNode {
    /// Characters on the path from the root to this node
    prefix: String,
    /// Entries whose indexed headword equals `prefix`, in source order
    entry_ids: Vec<EntryNo>,
    /// Child nodes, one per next character, in first-insertion order
    children: IndexMap<char, TrieNode>,
}

impl TrieNode {
    fn new(prefix: String) -> Self {
        Self {
            prefix,
            entry_ids: Vec::new(),
            children: IndexMap::new(),
        }
    }

    // Depth-first, in child-insertion order. Headwords are at most a handful
    // of characters deep, so plain recursion is fine.
    fn gather_subtree(&self, out: &mut Vec<EntryNo>) {
        out.extend_from_slice(&self.entry_ids);
        for child in self.children.values() {
            child.gather_subtree(out);
        }
    }
}

/// In-memory CC-CEDICT index over a character trie.
///
/// Built once from a parsed entry sequence and immutable afterwards, so a
/// built index can be shared read-only across threads without locking.
pub struct Cedict {
    root: TrieNode,
    entries: Vec<Entry>,
    script: Script,
}

impl Cedict {
    /// Builds an index over `entries`, keyed by the given script.
    ///
    /// Insertion is an unconditional append: entries sharing a headword
    /// (homographs) all attach to the same node, in source order. The source
    /// order also fixes child iteration order throughout the trie.
    pub fn build(entries: Vec<Entry>, script: Script) -> Self {
        let mut root = TrieNode::new(String::new());
        for (id, entry) in entries.iter().enumerate() {
            let key = match script {
                Script::Traditional => &entry.traditional,
                Script::Simplified => &entry.simplified,
            };
            let mut node = &mut root;
            let mut prefix = String::new();
            for c in key.chars() {
                prefix.push(c);
                node = node
                    .children
                    .entry(c)
                    .or_insert_with(|| TrieNode::new(prefix.clone()));
            }
            node.entry_ids.push(id);
        }
        debug!("built {:?}-keyed trie over {} entries", script, entries.len());
        Self { root, entries, script }
    }

    /// Reads and parses the CC-CEDICT file at `path`, then builds an index
    /// keyed by traditional headwords.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains a malformed
    /// data line. Queries themselves never fail.
    pub fn load_traditional<P: AsRef<Path>>(path: P) -> Result<Self> {
        let entries = parser::parse_file(path)?;
        Ok(Self::build(entries, Script::Traditional))
    }

    /// Same as [`Cedict::load_traditional`], keyed by simplified headwords.
    pub fn load_simplified<P: AsRef<Path>>(path: P) -> Result<Self> {
        let entries = parser::parse_file(path)?;
        Ok(Self::build(entries, Script::Simplified))
    }

    /// Returns the entries whose indexed headword equals `query`.
    ///
    /// Empty if the trie has no path for `query`, or if the path exists only
    /// as a prefix of longer headwords.
    pub fn exact_match(&self, query: &str) -> Vec<&Entry> {
        match self.walk(query, |_| {}) {
            Some(node) => self.resolve(&node.entry_ids),
            None => Vec::new(),
        }
    }

    /// Returns the entries whose indexed headword starts with `query`,
    /// including `query` itself.
    ///
    /// The subtree is traversed depth-first in child-insertion order, so the
    /// result order is stable but not alphabetic. `starting_with("")`
    /// enumerates the entire dictionary.
    pub fn starting_with(&self, query: &str) -> Vec<&Entry> {
        match self.walk(query, |_| {}) {
            Some(node) => {
                trace!("gathering subtree under prefix {:?}", node.prefix);
                let mut ids = Vec::new();
                node.gather_subtree(&mut ids);
                self.resolve(&ids)
            }
            None => Vec::new(),
        }
    }

    /// Returns the entries for every non-empty prefix of `query` that is a
    /// headword, in order of increasing prefix length.
    ///
    /// E.g. for a query of "我們是" this returns the entries for 我 and 我們.
    /// The walk stops at the first character with no trie path; characters
    /// past the break are not consumed.
    pub fn prefixes_of(&self, query: &str) -> Vec<&Entry> {
        let mut ids = Vec::new();
        let _ = self.walk(query, |node| ids.extend_from_slice(&node.entry_ids));
        self.resolve(&ids)
    }

    /// Number of entries held by the index.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries, in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The script this index is keyed by.
    pub fn script(&self) -> Script {
        self.script
    }

    // The shared walk primitive behind all three queries: follows `query`
    // one character at a time, calling `visit` on each node reached, and
    // returns the terminal node only if the full path exists. The root is
    // never visited; a walk over the empty query returns the root.
    fn walk<'a>(&'a self, query: &str, mut visit: impl FnMut(&'a TrieNode)) -> Option<&'a TrieNode> {
        let mut node = &self.root;
        for c in query.chars() {
            node = node.children.get(&c)?;
            visit(node);
        }
        Some(node)
    }

    fn resolve(&self, ids: &[EntryNo]) -> Vec<&Entry> {
        ids.iter().map(|&id| &self.entries[id]).collect()
    }
}
