//! Index and error tests for ledbank-core

use ledbank_core::{LedError, LedIndex, LED_COUNT};

#[test]
fn test_index_validity_boundaries() {
    assert!(!LedIndex::is_valid(0));
    assert!(LedIndex::is_valid(1));
    assert!(LedIndex::is_valid(16));
    assert!(!LedIndex::is_valid(17));
}

#[test]
fn test_index_valid_range_matches_predicate() {
    for raw in 0..=u8::MAX {
        assert_eq!(LedIndex::new(raw).is_ok(), (1..=16).contains(&raw));
    }
}

#[test]
fn test_index_invalid_error_kind() {
    assert_eq!(LedIndex::new(0), Err(LedError::InvalidArgument));
    assert_eq!(LedIndex::try_from(17u8), Err(LedError::InvalidArgument));
}

#[test]
fn test_index_raw_round_trip() {
    let led = LedIndex::new(7).unwrap();
    assert_eq!(led.raw(), 7);
    assert_eq!(u8::from(led), 7);
    assert_eq!(LedIndex::LAST.raw(), LED_COUNT);
}

#[test]
fn test_index_ordering() {
    let a = LedIndex::new(3).unwrap();
    let b = LedIndex::new(9).unwrap();
    assert!(b > a);
}
