//! The structured filter representation shared by every query path.

/// Names of the constraints a [`FilterSet`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FilterField {
    /// `is_palindrome`
    IsPalindrome,
    /// `min_length`
    MinLength,
    /// `max_length`
    MaxLength,
    /// `word_count`
    WordCount,
    /// `contains_character`
    ContainsCharacter,
}

impl FilterField {
    /// All fields in canonical order.
    pub const ALL: [FilterField; 5] = [
        FilterField::IsPalindrome,
        FilterField::MinLength,
        FilterField::MaxLength,
        FilterField::WordCount,
        FilterField::ContainsCharacter,
    ];

    /// Returns the snake_case name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::IsPalindrome => "is_palindrome",
            FilterField::MinLength => "min_length",
            FilterField::MaxLength => "max_length",
            FilterField::WordCount => "word_count",
            FilterField::ContainsCharacter => "contains_character",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of optional constraints over [`StringRecord`](crate::StringRecord)s.
///
/// Absent fields impose no constraint. Numeric fields are signed and
/// `contains_character` is free text so that values arriving from
/// uncontrolled input can be represented as-is and rejected by
/// [`validate`](crate::validate) rather than silently coerced.
///
/// # Example
///
/// ```rust
/// use sift::FilterSet;
///
/// let filters = FilterSet::new()
///     .with_palindrome(true)
///     .with_min_length(3)
///     .with_contains_character("a");
///
/// assert_eq!(filters.len(), 3);
/// assert_eq!(filters.to_string(), "is_palindrome=true, min_length=3, contains_character=a");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSet {
    /// Exact palindrome flag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on length.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub min_length: Option<i64>,
    /// Inclusive upper bound on length.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub max_length: Option<i64>,
    /// Exact word count.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub word_count: Option<i64>,
    /// Character that must occur in the value (case-insensitive).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub contains_character: Option<String>,
}

impl FilterSet {
    /// Creates an empty filter set, which matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the palindrome constraint.
    pub fn with_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    /// Sets the inclusive minimum length.
    pub fn with_min_length(mut self, min_length: i64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the inclusive maximum length.
    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the exact word count.
    pub fn with_word_count(mut self, word_count: i64) -> Self {
        self.word_count = Some(word_count);
        self
    }

    /// Sets the required character.
    pub fn with_contains_character(mut self, character: impl Into<String>) -> Self {
        self.contains_character = Some(character.into());
        self
    }

    /// Returns true if no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of constraints present.
    pub fn len(&self) -> usize {
        self.fields().len()
    }

    /// Returns the fields that carry a constraint, in canonical order.
    pub fn fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|field| self.has(*field))
            .collect()
    }

    /// Returns true if `field` carries a constraint.
    pub fn has(&self, field: FilterField) -> bool {
        match field {
            FilterField::IsPalindrome => self.is_palindrome.is_some(),
            FilterField::MinLength => self.min_length.is_some(),
            FilterField::MaxLength => self.max_length.is_some(),
            FilterField::WordCount => self.word_count.is_some(),
            FilterField::ContainsCharacter => self.contains_character.is_some(),
        }
    }
}

impl std::fmt::Display for FilterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::with_capacity(5);
        if let Some(v) = self.is_palindrome {
            parts.push(format!("is_palindrome={v}"));
        }
        if let Some(v) = self.min_length {
            parts.push(format!("min_length={v}"));
        }
        if let Some(v) = self.max_length {
            parts.push(format!("max_length={v}"));
        }
        if let Some(v) = self.word_count {
            parts.push(format!("word_count={v}"));
        }
        if let Some(v) = &self.contains_character {
            parts.push(format!("contains_character={v}"));
        }
        if parts.is_empty() {
            f.write_str("*")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}
