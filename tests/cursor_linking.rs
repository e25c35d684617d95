//! Cursor-linked flattening tests

use std::ptr;

use nestlink::{flatten_cursor, Cursor, Node, Pulled, Scalar};
mod common;
use common::*;

#[test]
fn test_list_cursor_pulled_to_completion() {
    let root = lit("[1, [2, 3]]");
    let inner = child(&root, 1);
    let mut cursor = Cursor::over(&root);
    let id = cursor.id();

    let triples: Vec<_> = flatten_cursor(&mut cursor, None)
        .map(|linked| linked.into_parts())
        .collect();

    assert_eq!(
        triples,
        vec![
            (&int(1), Some(id), None),
            (&int(2), Some(id), Some(inner)),
            (&int(3), Some(id), Some(inner)),
        ]
    );
    assert!(ptr::eq(triples[1].2.unwrap(), inner));
    assert_eq!(cursor.pulled(), 2);
}

#[test]
fn test_externally_exhausted_cursor_yields_nothing() {
    let root = lit("[1, [2, 3]]");
    let mut cursor = Cursor::over(&root);
    while cursor.next().is_some() {}

    assert_eq!(flatten_cursor(&mut cursor, None).count(), 0);
    // Exhaustion is sticky, not an error
    assert_eq!(flatten_cursor(&mut cursor, None).count(), 0);
}

#[test]
fn test_cursor_over_arbitrary_iterator() {
    let a = lit("(1, 2)");
    let b = Node::leaf(int(3));
    let pieces = vec![&a, &b];
    let mut cursor = Cursor::new(pieces);
    let id = cursor.id();

    let triples: Vec<_> = flatten_cursor(&mut cursor, None).collect();
    let values: Vec<&Scalar> = triples.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![&int(1), &int(2), &int(3)]);
    assert!(triples.iter().all(|t| t.cursor == Some(id)));
    assert!(ptr::eq(triples[0].parent.unwrap(), &a));
    assert!(triples[2].parent.is_none());
}

#[test]
fn test_stopping_early_resumes_where_it_left_off() {
    let root = lit("[[1, 2], 3, [4]]");
    let mut cursor = Cursor::over(&root);

    // Both leaves of the first element come from a single pull
    let first: Vec<_> = flatten_cursor(&mut cursor, None)
        .take(2)
        .map(|t| t.value.clone())
        .collect();
    assert_eq!(first, vec![int(1), int(2)]);
    assert_eq!(cursor.pulled(), 1);

    let rest: Vec<_> = flatten_cursor(&mut cursor, None)
        .map(|t| t.value.clone())
        .collect();
    assert_eq!(rest, vec![int(3), int(4)]);

    // No replay of consumed elements
    assert_eq!(flatten_cursor(&mut cursor, None).count(), 0);
}

#[test]
fn test_leaf_in_place_of_cursor() {
    let container = lit("[7, 8]");
    let leaf = child(&container, 0);

    let triples: Vec<_> = flatten_cursor(leaf, Some(&container)).collect();
    assert_eq!(triples.len(), 1);
    let (value, producer, parent) = triples[0].into_parts();
    assert_eq!(value, &int(7));
    assert!(producer.is_none());
    assert!(ptr::eq(parent.unwrap(), &container));
}

#[test]
fn test_two_cursors_are_distinguished() {
    let left = lit("[1, 2]");
    let right = lit("[3]");
    let mut first = Cursor::over(&left);
    let mut second = Cursor::over(&right);

    let a: Vec<_> = flatten_cursor(&mut first, None).collect();
    let b: Vec<_> = flatten_cursor(&mut second, None).collect();

    assert!(a.iter().all(|t| t.cursor == Some(first.id())));
    assert!(b.iter().all(|t| t.cursor == Some(second.id())));
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_nested_cursor_leaves_carry_inner_id() {
    let root = lit("[1, [2, 3]]");
    let other = lit("[(4, 5), 6]");
    let inner = Cursor::over(&other).within(&other);
    let inner_id = inner.id();
    let mut outer = Cursor::new([Pulled::from(&root), Pulled::from(inner)]);
    let outer_id = outer.id();

    let triples: Vec<_> = flatten_cursor(&mut outer, None).collect();
    let owners: Vec<_> = triples
        .iter()
        .map(|t| (t.value.clone(), t.cursor))
        .collect();
    assert_eq!(
        owners,
        vec![
            (int(1), Some(outer_id)),
            (int(2), Some(outer_id)),
            (int(3), Some(outer_id)),
            (int(4), Some(inner_id)),
            (int(5), Some(inner_id)),
            (int(6), Some(inner_id)),
        ]
    );
    assert_ne!(outer_id, inner_id);

    assert!(ptr::eq(triples[0].parent.unwrap(), &root));
    assert!(ptr::eq(triples[3].parent.unwrap(), child(&other, 0)));
    assert!(ptr::eq(triples[5].parent.unwrap(), &other));
}
