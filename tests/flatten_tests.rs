//! Integration tests for `flatten` and nested enumerables.

use lazyfn::{Depth, Enumerable, IterCursor, Key, Nested, flatten, to_array};
use rstest::rstest;

// =============================================================================
// Helpers
// =============================================================================

type Tree = Nested<'static, &'static str>;

fn leaf(value: &'static str) -> Tree {
    Nested::Leaf(value)
}

/// `['a', ['b', ['c', ['d']]], 'e']`
fn staircase() -> Vec<Tree> {
    vec![
        leaf("a"),
        Nested::nest(vec![
            leaf("b"),
            Nested::nest(vec![leaf("c"), Nested::nest(vec![leaf("d")])]),
        ]),
        leaf("e"),
    ]
}

/// Renders one level as a compact string, consuming nested levels.
fn render(values: Vec<Tree>) -> String {
    let parts: Vec<String> = values
        .into_iter()
        .map(|value| match value {
            Nested::Leaf(leaf) => leaf.to_string(),
            Nested::Nested(inner) => format!("[{}]", render(to_array(inner).unwrap().into_values())),
        })
        .collect();
    parts.join(",")
}

// =============================================================================
// Depth
// =============================================================================

#[rstest]
#[case(Depth::Levels(0), "a,[b,[c,[d]]],e")]
#[case(Depth::Levels(1), "a,b,[c,[d]],e")]
#[case(Depth::Levels(2), "a,b,c,[d],e")]
#[case(Depth::Levels(3), "a,b,c,d,e")]
#[case(Depth::Levels(10), "a,b,c,d,e")]
#[case(Depth::Unbounded, "a,b,c,d,e")]
fn test_flatten_depth(#[case] depth: Depth, #[case] expected: &str) {
    let flat = to_array(flatten(staircase(), depth)).unwrap();
    assert_eq!(render(flat.into_values()), expected);
}

#[rstest]
fn test_flatten_accepts_plain_levels() {
    let flat = to_array(flatten(staircase(), 2_usize)).unwrap();
    assert_eq!(render(flat.into_values()), "a,b,c,[d],e");
}

#[rstest]
fn test_flatten_renumbers_keys() {
    let flat = to_array(flatten(staircase(), Depth::Unbounded)).unwrap();
    let keys: Vec<Key> = flat.keys().cloned().collect();

    assert_eq!(keys, (0..5).map(Key::Index).collect::<Vec<_>>());
}

// =============================================================================
// Shapes
// =============================================================================

#[rstest]
fn test_flatten_mixed_nested_shapes() {
    let nested: Vec<Tree> = vec![
        Nested::nest(Enumerable::stateful(IterCursor::new(vec![leaf("x"), leaf("y")]))),
        Nested::nest(Enumerable::wrap(vec![leaf("z")])),
    ];
    let flat = to_array(flatten(nested, Depth::Unbounded)).unwrap();

    assert_eq!(render(flat.into_values()), "x,y,z");
}

#[rstest]
fn test_flatten_empty() {
    assert!(to_array(flatten(Vec::<Tree>::new(), Depth::Unbounded)).unwrap().is_empty());
}

#[rstest]
fn test_flatten_stateful_outer() {
    let outer = Enumerable::stateful(IterCursor::new(staircase()));
    let flat = to_array(flatten(outer, 1_usize)).unwrap();

    assert_eq!(render(flat.into_values()), "a,b,[c,[d]],e");
}
