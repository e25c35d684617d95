//! Nested structure representation
//!
//! A structure is a tagged union of leaves and three aggregate kinds:
//!   List  - ordered sequence
//!   Tuple - fixed tuple-like sequence
//!   Set   - unordered set (enumerated in `Ord` order)
//!
//! Anything that is not an aggregate is a leaf and stays opaque.

use std::collections::{btree_set, BTreeSet};
use std::fmt;
use std::slice;

/// Kind of a structure node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Opaque value, terminates traversal
    Leaf,

    /// Ordered sequence
    List,

    /// Fixed tuple-like sequence
    Tuple,

    /// Unordered set
    Set,
}

impl Kind {
    /// Whether nodes of this kind hold further nodes
    #[inline]
    pub fn is_aggregate(self) -> bool {
        !matches!(self, Kind::Leaf)
    }
}

/// Nested structure: a leaf or an aggregate of further nodes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de> + Ord"))
)]
pub enum Node<T> {
    /// Opaque leaf value
    Leaf(T),

    /// Ordered sequence
    List(Vec<Node<T>>),

    /// Tuple-like sequence
    Tuple(Vec<Node<T>>),

    /// Set of distinct nodes
    Set(BTreeSet<Node<T>>),
}

impl<T> Node<T> {
    /// Wrap a leaf value
    pub fn leaf(value: T) -> Self {
        Node::Leaf(value)
    }

    /// Build a list from its elements
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Node<T>>,
    {
        Node::List(items.into_iter().collect())
    }

    /// Build a tuple from its elements
    pub fn tuple<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Node<T>>,
    {
        Node::Tuple(items.into_iter().collect())
    }

    /// Build a set; duplicate elements collapse
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Node<T>>,
        T: Ord,
    {
        Node::Set(items.into_iter().collect())
    }

    /// Node kind
    pub fn kind(&self) -> Kind {
        match self {
            Node::Leaf(_) => Kind::Leaf,
            Node::List(_) => Kind::List,
            Node::Tuple(_) => Kind::Tuple,
            Node::Set(_) => Kind::Set,
        }
    }

    /// Check if this node holds further nodes
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        self.kind().is_aggregate()
    }

    /// Leaf value, if this is a leaf
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Node::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// Number of immediate elements (0 for leaves)
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::List(items) | Node::Tuple(items) => items.len(),
            Node::Set(items) => items.len(),
        }
    }

    /// Check for a leaf or an empty aggregate
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Immediate elements in iteration order
    ///
    /// Leaves have no elements.
    pub fn children(&self) -> Children<'_, T> {
        let inner = match self {
            Node::Leaf(_) => ChildrenInner::Empty,
            Node::List(items) | Node::Tuple(items) => ChildrenInner::Seq(items.iter()),
            Node::Set(items) => ChildrenInner::Set(items.iter()),
        };
        Children { inner }
    }

    /// Count leaves reachable from this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            _ => self.children().map(Node::leaf_count).sum(),
        }
    }

    /// Maximum aggregate nesting depth (0 for a leaf)
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            _ => 1 + self.children().map(Node::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::Leaf(value)
    }
}

/// Iterator over the immediate elements of a node
#[derive(Debug)]
pub struct Children<'a, T> {
    inner: ChildrenInner<'a, T>,
}

#[derive(Debug)]
enum ChildrenInner<'a, T> {
    Seq(slice::Iter<'a, Node<T>>),
    Set(btree_set::Iter<'a, Node<T>>),
    Empty,
}

impl<T> Clone for Children<'_, T> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            ChildrenInner::Seq(iter) => ChildrenInner::Seq(iter.clone()),
            ChildrenInner::Set(iter) => ChildrenInner::Set(iter.clone()),
            ChildrenInner::Empty => ChildrenInner::Empty,
        };
        Self { inner }
    }
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = &'a Node<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Seq(iter) => iter.next(),
            ChildrenInner::Set(iter) => iter.next(),
            ChildrenInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ChildrenInner::Seq(iter) => iter.size_hint(),
            ChildrenInner::Set(iter) => iter.size_hint(),
            ChildrenInner::Empty => (0, Some(0)),
        }
    }
}

impl<T> ExactSizeIterator for Children<'_, T> {}

/// Renders the literal syntax: `[a, b]`, `(a,)`, `{a, b}`
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self {
            Node::Leaf(value) => return write!(f, "{}", value),
            Node::List(_) => ("[", "]"),
            Node::Tuple(_) => ("(", ")"),
            Node::Set(_) => ("{", "}"),
        };

        f.write_str(open)?;
        for (idx, child) in self.children().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", child)?;
        }
        // One-element tuples keep their trailing comma
        if matches!(self, Node::Tuple(items) if items.len() == 1) {
            f.write_str(",")?;
        }
        f.write_str(close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<i32> {
        Node::list([
            Node::leaf(1),
            Node::tuple([Node::leaf(2), Node::list([Node::leaf(3)])]),
            Node::set([Node::leaf(5), Node::leaf(4)]),
        ])
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Node::leaf(1).kind(), Kind::Leaf);
        assert!(!Node::leaf(1).is_aggregate());
        assert!(Node::<i32>::list([]).is_aggregate());
        assert!(Node::<i32>::tuple([]).is_aggregate());
        assert!(Node::<i32>::set([]).is_aggregate());
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        let node = Node::leaf("x");
        assert_eq!(node.children().count(), 0);
        assert_eq!(node.len(), 0);
    }

    #[test]
    fn test_set_children_are_ordered() {
        let node = Node::set([Node::leaf(3), Node::leaf(1), Node::leaf(2), Node::leaf(1)]);
        let values: Vec<_> = node.children().filter_map(Node::as_leaf).copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_leaf_count_and_depth() {
        let node = sample();
        assert_eq!(node.leaf_count(), 5);
        assert_eq!(node.depth(), 3);
        assert_eq!(Node::leaf(0).depth(), 0);
        assert_eq!(Node::<i32>::list([]).depth(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "[1, (2, [3]), {4, 5}]");
        assert_eq!(Node::tuple([Node::leaf(7)]).to_string(), "(7,)");
        assert_eq!(Node::<i32>::tuple([]).to_string(), "()");
        assert_eq!(Node::<i32>::set([]).to_string(), "{}");
    }
}
