//! Raw filter parameters for the structured (non-natural-language) path.

use crate::error::{ParameterError, SiftError, SiftResult};
use crate::filter::{FilterField, FilterSet};

/// Filter values exactly as received from a caller, before type conversion.
///
/// Transports that receive filters as text (query strings, form fields,
/// command-line flags) fill this in and call [`FilterSet::from_params`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    /// `true`/`1`/`yes` or `false`/`0`/`no`, case-insensitive.
    pub is_palindrome: Option<String>,
    /// Signed integer text.
    pub min_length: Option<String>,
    /// Signed integer text.
    pub max_length: Option<String>,
    /// Signed integer text.
    pub word_count: Option<String>,
    /// Character text.
    pub contains_character: Option<String>,
}

impl FilterParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw value for `field`.
    pub fn set(mut self, field: FilterField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            FilterField::IsPalindrome => self.is_palindrome = value,
            FilterField::MinLength => self.min_length = value,
            FilterField::MaxLength => self.max_length = value,
            FilterField::WordCount => self.word_count = value,
            FilterField::ContainsCharacter => self.contains_character = value,
        }
        self
    }

    /// Builds raw parameters from `(name, value)` pairs.
    ///
    /// Unknown names are ignored; a repeated name keeps its last value.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs.into_iter().fold(Self::new(), |params, (name, value)| {
            match FilterField::ALL.iter().find(|f| f.as_str() == name) {
                Some(field) => params.set(*field, value),
                None => params,
            }
        })
    }
}

impl FilterSet {
    /// Converts raw parameters into a typed filter set.
    ///
    /// Only the types are checked here. Range and consistency checks are
    /// left to [`validate`](crate::validate), so a negative `min_length`
    /// converts successfully and is rejected there.
    ///
    /// # Errors
    ///
    /// [`SiftError::InvalidParameters`] listing every field (in canonical
    /// order) whose text does not convert.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::{FilterParams, FilterSet};
    ///
    /// let params = FilterParams::from_pairs([("is_palindrome", "yes"), ("min_length", "4")]);
    /// let filters = FilterSet::from_params(&params).unwrap();
    /// assert_eq!(filters.is_palindrome, Some(true));
    /// assert_eq!(filters.min_length, Some(4));
    /// ```
    pub fn from_params(params: &FilterParams) -> SiftResult<Self> {
        let mut errors = Vec::new();
        let is_palindrome = convert(
            &mut errors,
            FilterField::IsPalindrome,
            params.is_palindrome.as_deref(),
            parse_bool,
        );
        let min_length = convert(
            &mut errors,
            FilterField::MinLength,
            params.min_length.as_deref(),
            parse_int,
        );
        let max_length = convert(
            &mut errors,
            FilterField::MaxLength,
            params.max_length.as_deref(),
            parse_int,
        );
        let word_count = convert(
            &mut errors,
            FilterField::WordCount,
            params.word_count.as_deref(),
            parse_int,
        );

        if !errors.is_empty() {
            return Err(SiftError::InvalidParameters { errors });
        }

        Ok(Self {
            is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character: params.contains_character.clone(),
        })
    }
}

/// Converts one raw value, recording a failure instead of stopping.
fn convert<T>(
    errors: &mut Vec<ParameterError>,
    field: FilterField,
    raw: Option<&str>,
    parse: fn(&str) -> Result<T, &'static str>,
) -> Option<T> {
    match parse(raw?) {
        Ok(value) => Some(value),
        Err(reason) => {
            errors.push(ParameterError {
                field,
                reason: reason.to_string(),
            });
            None
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool, &'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err("must be a boolean value (true/false)"),
    }
}

fn parse_int(raw: &str) -> Result<i64, &'static str> {
    raw.trim().parse::<i64>().map_err(|_| "must be a valid integer")
}
