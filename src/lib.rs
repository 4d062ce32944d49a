//! # cedict - CC-CEDICT Dictionary Parser and Trie Index
//!
//! This crate turns the flat, line-oriented CC-CEDICT Chinese-dictionary text
//! format into an in-memory character-trie index supporting three lookup
//! modes.
//!
//! ## Features
//!
//! - **Parse CC-CEDICT text**: One typed [`Entry`] per data line, with
//!   comment and blank lines skipped and source order preserved
//! - **Exact lookup**: All entries for a headword, homographs included
//! - **Prefix enumeration**: Every entry starting with a given prefix
//! - **Prefix scan**: Entries for every prefix of a query string, for
//!   word-segmentation of running text
//! - **Script selection**: Key the index by traditional or simplified
//!   headwords at build time
//!
//! ## Quick Start
//!
//! ### Loading a dictionary file
//!
//! ```no_run
//! use cedict::Cedict;
//!
//! # fn main() -> cedict::Result<()> {
//! // Build a traditional-keyed index from a CC-CEDICT file
//! let dict = Cedict::load_traditional("cedict_ts.u8")?;
//!
//! // Look up a word
//! for entry in dict.exact_match("愛人") {
//!     println!("[{}] {}", entry.pinyin, entry.definition);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Building from text already in memory
//!
//! ```
//! use cedict::{parser, Cedict, Script};
//!
//! # fn main() -> cedict::Result<()> {
//! let text = "愛 爱 [ai4] /to love/affection/\n愛人 爱人 [ai4 ren2] /sweetheart/spouse/\n";
//! let entries = parser::parse(text)?;
//! let dict = Cedict::build(entries, Script::Simplified);
//!
//! assert_eq!(dict.starting_with("爱").len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into two core modules plus shared support types:
//!
//! - **Record parsing**: [`parser`] converts source text into typed entries
//! - **Trie index**: [`trie`] builds the character trie and answers queries
//! - **Data model**: [`entry`] defines the dictionary record type
//!
//! The index is built once, synchronously, from a fully-parsed entry
//! sequence and is immutable afterwards; a built [`Cedict`] can be shared
//! read-only across threads without locking.
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are
//! represented by [`CedictError`]. The crate uses the `snafu` library for
//! ergonomic error handling with context and backtraces. Only loading can
//! fail (file access or a malformed data line); queries never fail and
//! return empty results for unmatched paths.
//!
//! ```
//! use cedict::{Result, CedictError};
//!
//! fn example() -> Result<String> {
//!     // Operations that may fail return Result<T>
//!     Ok("success".to_string())
//! }
//! ```

pub mod entry;
pub mod error;
pub mod parser;
pub mod trie;

// Re-export commonly used types for convenience
pub use entry::Entry;
pub use trie::{Cedict, EntryNo, Script};
pub use parser::{parse, parse_file};

// Re-export error types for convenience
pub use error::{CedictError, Result, snafu};
