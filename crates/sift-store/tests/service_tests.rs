//! End-to-end tests for the store and service layer.

use std::sync::Arc;
use std::thread;

use sift::{FilterField, SiftError};
use sift_executor::{ExecutorConfig, ExecutorError, RecordStore};
use sift_store::{FilterParams, FilterSet, MemoryStore, ServiceConfig, StoreError, StringService};

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    for value in [
        "hello",
        "level",
        "racecar",
        "step on no pets",
        "banana",
        "A Toyota",
        "kayak",
    ] {
        store.insert_if_absent(value).unwrap();
    }
    store
}

fn values(records: &[sift::StringRecord]) -> Vec<&str> {
    records.iter().map(|r| r.value.as_str()).collect()
}

#[test]
fn test_create_then_query_both_paths() {
    let store = MemoryStore::new();
    let service = StringService::new(&store);

    for value in ["racecar", "level", "hello"] {
        service.create(value).unwrap();
    }

    let natural = service
        .filter_natural_language("palindromes longer than 5 characters")
        .unwrap();
    let direct = service
        .list(&FilterParams::from_pairs([
            ("is_palindrome", "true"),
            ("min_length", "6"),
        ]))
        .unwrap();

    assert_eq!(natural.interpreted, direct.filters);
    assert_eq!(values(&natural.records), vec!["racecar"]);
    assert_eq!(direct.values(), vec!["racecar"]);
}

#[test]
fn test_record_properties() {
    let store = MemoryStore::new();
    let service = StringService::new(&store);

    let record = service.create("step on no pets").unwrap();
    assert_eq!(record.length(), 15);
    assert_eq!(record.word_count(), 4);
    assert!(record.is_palindrome());
    assert_eq!(record.content_hash().len(), 64);
    assert_eq!(record.properties.character_frequency.get(&'p'), Some(&2));
}

#[test]
fn test_palindrome_phrases() {
    let store = seeded_store();
    let service = StringService::new(&store);

    let result = service
        .filter_natural_language("palindromic strings with 4 words")
        .unwrap();
    assert_eq!(values(&result.records), vec!["step on no pets"]);

    let result = service
        .filter_natural_language("single word palindromes containing the letter y")
        .unwrap();
    assert_eq!(values(&result.records), vec!["kayak"]);
}

#[test]
fn test_letter_filter_is_case_insensitive() {
    let store = seeded_store();
    let service = StringService::new(&store);

    let result = service
        .filter_natural_language("strings containing the letter t")
        .unwrap();
    assert_eq!(values(&result.records), vec!["A Toyota", "step on no pets"]);
}

#[test]
fn test_unrecognized_query_counts_as_parse_failure() {
    let store = seeded_store();
    let service = StringService::new(&store);

    let err = service.filter_natural_language("xyz abc def").unwrap_err();
    assert!(matches!(
        err.as_query_error(),
        Some(SiftError::UnrecognizedQuery { .. })
    ));
    assert_eq!(service.stats().parse_failures, 1);
}

#[test]
fn test_conflicting_params() {
    let store = seeded_store();
    let service = StringService::new(&store);

    let params = FilterParams::new()
        .set(FilterField::MinLength, "10")
        .set(FilterField::MaxLength, "5");
    let err = service.list(&params).unwrap_err();

    match err.as_query_error() {
        Some(SiftError::Conflict { fields, .. }) => {
            assert_eq!(fields, &vec![FilterField::MinLength, FilterField::MaxLength]);
        }
        other => panic!("Expected Conflict, got {other:?}"),
    }
    assert_eq!(service.stats().conflicts, 1);
}

#[test]
fn test_bad_params_name_every_failing_field() {
    let store = seeded_store();
    let service = StringService::new(&store);

    let params = FilterParams::from_pairs([
        ("word_count", "x"),
        ("is_palindrome", "maybe"),
        ("min_length", "five"),
        ("max_length", "9"),
    ]);
    match service.list(&params).unwrap_err().as_query_error() {
        Some(SiftError::InvalidParameters { errors }) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert_eq!(
                fields,
                vec![
                    FilterField::IsPalindrome,
                    FilterField::MinLength,
                    FilterField::WordCount,
                ]
            );
        }
        other => panic!("Expected InvalidParameters, got {other:?}"),
    }
    assert_eq!(service.stats().parse_failures, 1);
}

#[test]
fn test_list_all_newest_first() {
    let store = seeded_store();
    let service = StringService::new(&store);

    let result = service.list_filters(&FilterSet::new()).unwrap();
    assert_eq!(result.count(), 7);
    assert_eq!(result.values()[0], "kayak");
    assert_eq!(result.values()[6], "hello");
}

#[test]
fn test_delete_then_query() {
    let store = seeded_store();
    let service = StringService::new(&store);

    assert_eq!(service.delete("kayak").unwrap(), 1);
    let result = service.filter_natural_language("single word palindromes").unwrap();
    assert_eq!(values(&result.records), vec!["racecar", "level"]);

    let err = service.delete("kayak").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Executor(ExecutorError::NotFound { .. })
    ));
}

#[test]
fn test_concurrent_creates_of_same_value() {
    let store = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let service = StringService::with_config(store.as_ref(), ServiceConfig::no_cache());
                service.create("contended").map_err(|e| e.is_already_exists())
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
    assert!(outcomes.iter().all(|o| matches!(o, Ok(_) | Err(true))));
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn test_max_results_through_service() {
    let store = seeded_store();
    let config = ServiceConfig::with_executor(ExecutorConfig::new().with_max_results(2));
    let service = StringService::with_config(&store, config);

    let err = service.filter_natural_language("palindromes").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Executor(ExecutorError::ResultTooLarge { limit: 2, .. })
    ));
}

#[cfg(feature = "persistence")]
#[test]
fn test_snapshot_round_trip_preserves_queries() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strings.json");
    store.save_snapshot(&path).unwrap();

    let restored = MemoryStore::load_snapshot(&path).unwrap();
    let before = StringService::new(&store)
        .filter_natural_language("palindromes")
        .unwrap();
    let after = StringService::new(&restored)
        .filter_natural_language("palindromes")
        .unwrap();

    assert_eq!(values(&before.records), values(&after.records));
    assert!(restored.insert_if_absent("kayak").is_err());
}
