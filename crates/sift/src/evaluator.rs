//! Filter evaluation over analyzed records.

use crate::filter::FilterSet;
use crate::record::StringRecord;

/// Checks whether a record satisfies every constraint in `filters`.
///
/// Absent constraints always pass. Length bounds are inclusive and
/// `contains_character` is compared case-insensitively.
pub fn matches(filters: &FilterSet, record: &StringRecord) -> bool {
    let props = &record.properties;

    if let Some(expected) = filters.is_palindrome {
        if props.is_palindrome != expected {
            return false;
        }
    }

    let length = as_i64(props.length);
    if filters.min_length.is_some_and(|min| length < min) {
        return false;
    }
    if filters.max_length.is_some_and(|max| length > max) {
        return false;
    }

    if filters
        .word_count
        .is_some_and(|count| as_i64(props.word_count) != count)
    {
        return false;
    }

    if let Some(needle) = &filters.contains_character {
        if !record.value.to_lowercase().contains(&needle.to_lowercase()) {
            return false;
        }
    }

    true
}

/// Returns the records that satisfy `filters`, in their original order.
///
/// # Example
///
/// ```rust
/// use sift::{apply, FilterSet, StringRecord};
///
/// let records: Vec<StringRecord> = ["racecar", "level", "hello"]
///     .into_iter()
///     .map(StringRecord::new)
///     .collect();
///
/// let filters = FilterSet::new().with_palindrome(true).with_min_length(6);
/// let values: Vec<&str> = apply(&filters, &records).iter().map(|r| r.value.as_str()).collect();
/// assert_eq!(values, vec!["racecar"]);
/// ```
pub fn apply<'r, I>(filters: &FilterSet, records: I) -> Vec<&'r StringRecord>
where
    I: IntoIterator<Item = &'r StringRecord>,
{
    records
        .into_iter()
        .filter(|record| matches(filters, record))
        .collect()
}

fn as_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[&str]) -> Vec<StringRecord> {
        values.iter().map(|v| StringRecord::new(*v)).collect()
    }

    fn values<'a>(matched: &[&'a StringRecord]) -> Vec<&'a str> {
        matched.iter().map(|r| r.value.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = records(&["a", "bb", "ccc"]);
        assert_eq!(apply(&FilterSet::new(), &records).len(), 3);
    }

    #[test]
    fn test_and_semantics() {
        let records = records(&["racecar", "level", "hello"]);
        let filters = FilterSet::new().with_palindrome(true).with_min_length(6);
        assert_eq!(values(&apply(&filters, &records)), vec!["racecar"]);
    }

    #[test]
    fn test_palindrome_false() {
        let records = records(&["racecar", "level", "hello"]);
        let filters = FilterSet::new().with_palindrome(false);
        assert_eq!(values(&apply(&filters, &records)), vec!["hello"]);
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let records = records(&["abc", "abcd", "abcde"]);
        let filters = FilterSet::new().with_min_length(4).with_max_length(5);
        assert_eq!(values(&apply(&filters, &records)), vec!["abcd", "abcde"]);

        let filters = FilterSet::new().with_min_length(4).with_max_length(4);
        assert_eq!(values(&apply(&filters, &records)), vec!["abcd"]);
    }

    #[test]
    fn test_word_count_exact() {
        let records = records(&["one", "two words", "now three words"]);
        let filters = FilterSet::new().with_word_count(2);
        assert_eq!(values(&apply(&filters, &records)), vec!["two words"]);
    }

    #[test]
    fn test_contains_character_case_insensitive() {
        let records = records(&["Apple", "banana", "cherry"]);

        let filters = FilterSet::new().with_contains_character("a");
        assert_eq!(values(&apply(&filters, &records)), vec!["Apple", "banana"]);

        let filters = FilterSet::new().with_contains_character("C");
        assert_eq!(values(&apply(&filters, &records)), vec!["cherry"]);
    }

    #[test]
    fn test_order_preserved() {
        let records = records(&["zz", "aa", "mm"]);
        assert_eq!(
            values(&apply(&FilterSet::new().with_max_length(2), &records)),
            vec!["zz", "aa", "mm"]
        );
    }

    #[test]
    fn test_no_matches() {
        let records = records(&["hello"]);
        let filters = FilterSet::new().with_word_count(5);
        assert!(apply(&filters, &records).is_empty());
    }

    #[test]
    fn test_matches_single_record() {
        let record = StringRecord::new("Never odd or even");
        assert!(matches(&FilterSet::new().with_palindrome(true), &record));
        assert!(matches(&FilterSet::new().with_word_count(4), &record));
        assert!(matches(&FilterSet::new().with_contains_character("n"), &record));
        assert!(!matches(&FilterSet::new().with_contains_character("z"), &record));
    }
}
