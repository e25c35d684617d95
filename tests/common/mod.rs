//! Shared builders for integration tests

#![allow(dead_code)]

use nestlink::{Node, Scalar};

/// Parse a structure literal, panicking on malformed test input
pub fn lit(literal: &str) -> Node<Scalar> {
    literal
        .parse()
        .unwrap_or_else(|err| panic!("bad test literal {:?}: {}", literal, err))
}

/// Integer scalar
pub fn int(value: i64) -> Scalar {
    Scalar::Int(value)
}

/// Immediate element `idx` of a list or tuple
pub fn child(node: &Node<Scalar>, idx: usize) -> &Node<Scalar> {
    match node {
        Node::List(items) | Node::Tuple(items) => &items[idx],
        other => panic!("{} has no indexed children", other),
    }
}
