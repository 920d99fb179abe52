//! The analyzed string record.

use chrono::{DateTime, Utc};

use crate::analyzer::{analyze, StringProperties};

/// One stored string together with its derived properties.
///
/// Records are immutable: the properties are computed once when the record
/// is created and the value is never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringRecord {
    /// The original string, stored verbatim.
    pub value: String,
    /// Properties derived from `value`.
    pub properties: StringProperties,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyzes `value` and stamps the record with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_created_at(value, Utc::now())
    }

    /// Analyzes `value` and stamps the record with `created_at`.
    pub fn with_created_at(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            value,
            properties,
            created_at,
        }
    }

    /// Returns the content hash identifying this record.
    pub fn content_hash(&self) -> &str {
        &self.properties.content_hash
    }

    /// Returns the length in code points.
    pub fn length(&self) -> usize {
        self.properties.length
    }

    /// Returns whether the value is a palindrome.
    pub fn is_palindrome(&self) -> bool {
        self.properties.is_palindrome
    }

    /// Returns the number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.properties.word_count
    }
}

impl std::fmt::Display for StringRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hash = self.content_hash();
        let preview: String = self.value.chars().take(50).collect();
        write!(f, "{}... - {}", hash.get(..8).unwrap_or(hash), preview)
    }
}
