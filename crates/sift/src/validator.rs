//! Consistency checks for filter sets.

use crate::error::{SiftError, SiftResult};
use crate::filter::{FilterField, FilterSet};

/// Checks a filter set for internal contradictions.
///
/// This is the single gate for both the natural-language path and the
/// structured path. Checks run in a fixed order and the first failure is
/// returned:
///
/// 1. `min_length` greater than `max_length`
/// 2. negative `min_length` or `max_length`
/// 3. negative `word_count`
/// 4. `contains_character` that is not exactly one character
///
/// # Examples
///
/// ```rust
/// use sift::{validate, FilterSet};
///
/// assert!(validate(&FilterSet::new().with_min_length(5).with_max_length(10)).is_ok());
/// assert!(validate(&FilterSet::new().with_min_length(10).with_max_length(5)).is_err());
/// ```
pub fn validate(filters: &FilterSet) -> SiftResult<()> {
    if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
        if min > max {
            return Err(SiftError::conflict(
                &[FilterField::MinLength, FilterField::MaxLength],
                format!("min_length ({min}) cannot be greater than max_length ({max})"),
            ));
        }
    }

    if let Some(min) = filters.min_length.filter(|v| *v < 0) {
        return Err(SiftError::conflict(
            &[FilterField::MinLength],
            format!("min_length ({min}) must be non-negative"),
        ));
    }

    if let Some(max) = filters.max_length.filter(|v| *v < 0) {
        return Err(SiftError::conflict(
            &[FilterField::MaxLength],
            format!("max_length ({max}) must be non-negative"),
        ));
    }

    if let Some(count) = filters.word_count.filter(|v| *v < 0) {
        return Err(SiftError::conflict(
            &[FilterField::WordCount],
            format!("word_count ({count}) must be non-negative"),
        ));
    }

    if let Some(character) = &filters.contains_character {
        if character.chars().count() != 1 {
            return Err(SiftError::conflict(
                &[FilterField::ContainsCharacter],
                "contains_character must be a single character",
            ));
        }
    }

    Ok(())
}
