//! Integration tests for normalization and materialization.
//!
//! Covers the three enumerable shapes (concrete, stateful, wrapping),
//! arbitrarily nested wrappers and single-pass sources.

use lazyfn::{
    Aggregate, Collection, Cursor, EmptyCursor, Entry, Enumerable, Error, IterCursor, Key,
    Normalizer, map, to_array, to_iterator,
};
use rstest::rstest;

// =============================================================================
// Helpers
// =============================================================================

/// A hand-written wrapper, the shape a caller's own type would take.
struct Shelf<V> {
    inner: Enumerable<'static, V>,
}

impl<V: 'static> Aggregate<'static> for Shelf<V> {
    type Value = V;

    fn into_inner(self: Box<Self>) -> Enumerable<'static, V> {
        self.inner
    }
}

fn shelf<V: 'static>(inner: Enumerable<'static, V>) -> Enumerable<'static, V> {
    Enumerable::wrapping(Shelf { inner })
}

fn values(collection: Collection<i32>) -> Vec<i32> {
    collection.into_values()
}

// =============================================================================
// to_array
// =============================================================================

#[rstest]
fn test_to_array_concrete() {
    let collection = to_array(vec![1, 2, 3]).unwrap();
    assert_eq!(collection, Collection::from_values([1, 2, 3]));
}

#[rstest]
fn test_to_array_stateful() {
    let collection = to_array(Enumerable::stateful(IterCursor::new(vec![1, 2, 3]))).unwrap();
    assert_eq!(collection, Collection::from_values([1, 2, 3]));
}

#[rstest]
fn test_to_array_empty_stateful() {
    let collection = to_array(Enumerable::stateful(EmptyCursor::<i32>::new())).unwrap();
    assert!(collection.is_empty());
}

#[rstest]
fn test_to_array_keeps_named_keys() {
    let named: Collection<&str> = [("b", "bee"), ("a", "ay")].into_iter().collect();
    let collection = to_array(named).unwrap();
    let keys: Vec<String> = collection.keys().map(ToString::to_string).collect();

    assert_eq!(keys, vec!["b", "a"]);
}

#[rstest]
#[case(Enumerable::from(Vec::<i32>::new()))]
#[case(Enumerable::stateful(EmptyCursor::new()))]
#[case(shelf(Enumerable::stateful(EmptyCursor::new())))]
#[case(Enumerable::wrap(shelf(Enumerable::empty())))]
fn test_to_array_empty_of_any_kind(#[case] enumerable: Enumerable<'static, i32>) {
    assert!(to_array(enumerable).unwrap().is_empty());
}

// =============================================================================
// to_iterator
// =============================================================================

#[rstest]
fn test_to_iterator_concrete() {
    let mut cursor = to_iterator(vec![1, 2, 3]).unwrap();

    assert_eq!(cursor.advance().unwrap(), Some(Entry::new(0, 1)));
    assert_eq!(cursor.advance().unwrap(), Some(Entry::new(1, 2)));
    assert_eq!(cursor.advance().unwrap(), Some(Entry::new(2, 3)));
    assert_eq!(cursor.advance().unwrap(), None);
    assert!(cursor.is_exhausted());
}

#[rstest]
fn test_to_iterator_stateful_is_returned_as_is() {
    let mut source = IterCursor::new(vec![1, 2, 3]);
    source.advance().unwrap();

    let cursor = to_iterator(Enumerable::stateful(source)).unwrap();
    assert_eq!(values(to_array(cursor).unwrap()), vec![2, 3]);
}

#[rstest]
fn test_to_iterator_wrapper() {
    let cursor = to_iterator(shelf(Enumerable::stateful(IterCursor::new(vec![1, 2, 3])))).unwrap();
    assert_eq!(values(to_array(cursor).unwrap()), vec![1, 2, 3]);
}

#[rstest]
fn test_to_iterator_nested_wrapper() {
    let nested = shelf(shelf(Enumerable::stateful(IterCursor::new(vec![1, 2, 3]))));
    let cursor = to_iterator(nested).unwrap();

    assert_eq!(values(to_array(cursor).unwrap()), vec![1, 2, 3]);
}

#[rstest]
#[case(Enumerable::from(vec![1, 2, 3]))]
#[case(Enumerable::stateful(IterCursor::new(vec![1, 2, 3])))]
#[case(shelf(shelf(Enumerable::from(vec![1, 2, 3]))))]
fn test_to_array_of_to_iterator_round_trips(#[case] enumerable: Enumerable<'static, i32>) {
    let collection = to_array(to_iterator(enumerable).unwrap()).unwrap();
    assert_eq!(collection, Collection::from_values([1, 2, 3]));
}

#[rstest]
fn test_to_iterator_result_feeds_combinators() {
    let cursor = to_iterator(shelf(Enumerable::from(vec![1, 2, 3]))).unwrap();
    let doubled = to_array(lazyfn::map(cursor, |n: i32| n * 2)).unwrap();

    assert_eq!(values(doubled), vec![2, 4, 6]);
}

#[rstest]
#[case(1)]
#[case(16)]
#[case(200)]
fn test_to_iterator_deeply_nested_wrappers(#[case] levels: usize) {
    let mut enumerable = Enumerable::from(vec![7]);
    for _ in 0..levels {
        enumerable = shelf(enumerable);
    }
    assert_eq!(values(to_array(enumerable).unwrap()), vec![7]);
}

#[rstest]
fn test_wrapper_chain_beyond_limit_is_unsupported() {
    let mut enumerable = Enumerable::from(vec![7]);
    for _ in 0..5 {
        enumerable = Enumerable::wrap(enumerable);
    }
    let error = Normalizer::new()
        .with_wrapper_depth_limit(4)
        .materialize(enumerable)
        .unwrap_err();

    assert!(matches!(error, Error::UnsupportedEnumerableKind { .. }));
}

// =============================================================================
// Single-pass sources
// =============================================================================

#[rstest]
fn test_exhausted_stateful_source_yields_empty_again() {
    let mut cursor = IterCursor::new(vec![1, 2, 3]);

    assert_eq!(values(to_array(Enumerable::stateful(&mut cursor)).unwrap()), vec![1, 2, 3]);
    assert!(cursor.is_exhausted());
    assert!(to_array(Enumerable::stateful(&mut cursor)).unwrap().is_empty());
}

#[rstest]
fn test_lent_cursor_is_accepted_directly() {
    let mut cursor = IterCursor::new(vec![1, 2, 3]);

    assert_eq!(values(to_array(lazyfn::take(&mut cursor, 2)).unwrap()), vec![1, 2]);
    assert_eq!(values(to_array(&mut cursor).unwrap()), vec![3]);
    assert!(to_array(&mut cursor).unwrap().is_empty());
}

#[rstest]
fn test_partially_consumed_source_resumes_where_it_stopped() {
    let mut cursor = IterCursor::new(vec![1, 2, 3]);
    cursor.advance().unwrap();

    let rest = to_array(Enumerable::stateful(&mut cursor)).unwrap();
    let keys: Vec<&Key> = rest.keys().collect();

    assert_eq!(keys, vec![&Key::Index(1), &Key::Index(2)]);
}

#[rstest]
fn test_entries_iterator() {
    let collected: Vec<(Key, i32)> = shelf(Enumerable::from(vec![5, 6]))
        .entries()
        .map(|entry| entry.unwrap().into_pair())
        .collect();

    assert_eq!(collected, vec![(Key::Index(0), 5), (Key::Index(1), 6)]);
}

#[rstest]
fn test_entries_over_borrowed_values() {
    let words = vec![String::from("left"), String::from("right")];
    let borrowed = map(IterCursor::new(words.iter()), |word| word.as_str());

    let collected: Vec<&str> = borrowed.entries().map(|entry| entry.unwrap().value).collect();
    assert_eq!(collected, vec!["left", "right"]);
}
