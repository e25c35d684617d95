//! Parent-linked depth-first flattening
//!
//! Explicit work-stack instead of native recursion:
//! one frame per open aggregate = (container, remaining children).
//! Stack depth equals the current nesting depth, so pathological
//! nesting costs heap, not call stack.

use super::{Children, Node};

/// One open aggregate on the work-stack
#[derive(Debug)]
struct Frame<'a, T> {
    /// Aggregate whose elements are being visited
    container: &'a Node<T>,

    /// Elements not yet visited
    children: Children<'a, T>,
}

impl<'a, T> Frame<'a, T> {
    fn open(container: &'a Node<T>) -> Self {
        Self {
            container,
            children: container.children(),
        }
    }
}

/// Lazy `(leaf, nearest parent)` sequence over a nested structure
///
/// Created by [`flatten_with_parent`]. Each call to `next` advances the
/// traversal just far enough to reach the following leaf.
#[derive(Debug)]
pub struct ParentFlatten<'a, T> {
    /// Root not yet inspected (taken on the first pull)
    root: Option<&'a Node<T>>,

    /// Open aggregates, innermost last
    stack: Vec<Frame<'a, T>>,
}

impl<'a, T> ParentFlatten<'a, T> {
    /// Start a traversal at `root`
    pub fn new(root: &'a Node<T>) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
        }
    }

    /// Number of aggregates currently open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, T> Iterator for ParentFlatten<'a, T> {
    type Item = (&'a T, Option<&'a Node<T>>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            match root {
                // Bare leaf: no container at all
                Node::Leaf(value) => return Some((value, None)),
                _ => self.stack.push(Frame::open(root)),
            }
        }

        while let Some(frame) = self.stack.last_mut() {
            match frame.children.next() {
                Some(Node::Leaf(value)) => return Some((value, Some(frame.container))),
                Some(child) => self.stack.push(Frame::open(child)),
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

impl<T> std::iter::FusedIterator for ParentFlatten<'_, T> {}

/// Flatten `root` into `(leaf, parent)` pairs, depth-first and left to right
///
/// The parent is the nearest enclosing aggregate of each leaf, or `None`
/// when `root` is itself a leaf. Empty aggregates contribute nothing.
/// Calling this twice on the same structure yields the same sequence.
///
/// ```
/// use nestlink::{flatten_with_parent, Node};
///
/// let inner = Node::list([Node::leaf(2), Node::leaf(3)]);
/// let root = Node::list([Node::leaf(1), inner.clone(), Node::leaf(4)]);
///
/// let pairs: Vec<_> = flatten_with_parent(&root).collect();
/// assert_eq!(pairs[0], (&1, Some(&root)));
/// assert_eq!(pairs[1], (&2, Some(&inner)));
/// assert_eq!(pairs[3], (&4, Some(&root)));
/// ```
pub fn flatten_with_parent<T>(root: &Node<T>) -> ParentFlatten<'_, T> {
    ParentFlatten::new(root)
}
