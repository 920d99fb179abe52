//! # sift
//!
//! String analysis and filter evaluation.
//!
//! This crate provides:
//! - **Analyzer**: Derive the fixed property set of a string (hash, length,
//!   palindrome flag, unique characters, word count, character frequencies)
//! - **Filter parser**: Translate English phrasings such as
//!   `"single word palindromes longer than 3 characters"` into a [`FilterSet`]
//! - **Validator**: Reject contradictory filter sets
//! - **Evaluator**: Apply a filter set to a sequence of [`StringRecord`]s
//!
//! ## Usage
//!
//! ```rust
//! use sift::{apply, parse, validate, StringRecord};
//!
//! let records: Vec<StringRecord> = ["racecar", "level", "hello"]
//!     .into_iter()
//!     .map(StringRecord::new)
//!     .collect();
//!
//! let filters = parse("palindromes at least 6 characters").unwrap();
//! validate(&filters).unwrap();
//!
//! let matches = apply(&filters, &records);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].value, "racecar");
//! ```
//!
//! ## Recognized Phrases
//!
//! | Phrase | Effect |
//! |--------|--------|
//! | `single word palindrome` | `word_count = 1`, `is_palindrome = true` |
//! | `palindrome` / `palindromic` / `palindromes` | `is_palindrome = true` |
//! | `single word` | `word_count = 1` |
//! | `3 words` / `three words` | `word_count = 3` |
//! | `longer than N characters` | `min_length = N + 1` |
//! | `shorter than N characters` | `max_length = N - 1` |
//! | `at least N characters` | `min_length = N` |
//! | `at most N characters` | `max_length = N` |
//! | `containing the letter x` | `contains_character = "x"` |
//! | `first vowel` .. `fifth vowel` | `contains_character = "a"` .. `"u"` |
//!
//! Phrases combine freely. When two phrases set the same field, the one later
//! in the table wins.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod analyzer;
mod error;
mod evaluator;
mod filter;
mod params;
mod parser;
mod record;
mod validator;

pub use analyzer::{analyze, content_hash, StringProperties};
pub use error::{ParameterError, SiftError, SiftResult};
pub use evaluator::{apply, matches};
pub use filter::{FilterField, FilterSet};
pub use params::FilterParams;
pub use parser::parse;
pub use record::StringRecord;
pub use validator::validate;
