//! Integration tests for game limits

use statpad_foundation::GameLimit;

#[test]
fn zero_is_not_a_limit() {
    assert!(GameLimit::new(0).is_none());
}

#[test]
fn positive_limits() {
    let limit = GameLimit::new(10).unwrap();
    assert_eq!(limit.get(), 10);
    assert_eq!(limit.as_len(), 10);
    assert_eq!(limit.to_string(), "10");
}

#[test]
fn truncation_with_limit() {
    let games: Vec<u32> = (1..=20).collect();
    let limit = GameLimit::new(5).unwrap();
    assert_eq!(games.iter().take(limit.as_len()).count(), 5);
}
