//! Derived string properties.
//!
//! [`analyze`] is a total, pure function: every input (including the empty
//! string) yields a property set, and equal inputs yield equal property sets.

use std::collections::{BTreeMap, HashSet};

use sha2::{Digest, Sha256};

/// Properties derived from a string value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringProperties {
    /// Lowercase hex SHA-256 digest of the UTF-8 bytes.
    pub content_hash: String,
    /// Number of Unicode code points.
    pub length: usize,
    /// Whether the ASCII-alphanumeric projection reads the same reversed.
    pub is_palindrome: bool,
    /// Number of distinct characters (case-sensitive).
    pub unique_characters: usize,
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Occurrence count per character (case-sensitive).
    pub character_frequency: BTreeMap<char, usize>,
}

/// Computes all derived properties of `value`.
///
/// # Examples
///
/// ```rust
/// use sift::analyze;
///
/// let props = analyze("A man, a plan");
/// assert_eq!(props.length, 13);
/// assert_eq!(props.word_count, 4);
/// assert!(!props.is_palindrome);
/// assert!(analyze("Race car").is_palindrome);
/// ```
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        content_hash: content_hash(value),
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: value.chars().collect::<HashSet<_>>().len(),
        word_count: value.split_whitespace().count(),
        character_frequency: character_frequency(value),
    }
}

/// Returns the lowercase hex SHA-256 digest of `value`.
pub fn content_hash(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

fn is_palindrome(value: &str) -> bool {
    let skeleton: Vec<char> = value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    skeleton.iter().eq(skeleton.iter().rev())
}

fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for ch in value.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
