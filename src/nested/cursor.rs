//! Cursor-linked flattening
//!
//! A cursor is a live, single-pass position over a sequence of elements.
//! An element is either a node or another cursor. Nodes pulled off a
//! cursor are expanded structurally; a nested cursor is drained in place
//! and owns the leaves it produces. Every leaf is reported together with
//! the innermost cursor whose pull produced it and its nearest enclosing
//! aggregate.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::{flatten_with_parent, Node, ParentFlatten};

static NEXT_CURSOR_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one [`Cursor`] for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorId(u64);

impl CursorId {
    fn fresh() -> Self {
        CursorId(NEXT_CURSOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CursorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor#{}", self.0)
    }
}

/// One element pulled off a [`Cursor`]
#[derive(Debug)]
pub enum Pulled<'a, T> {
    /// Borrowed structure, expanded depth-first by the traversal
    Node(&'a Node<T>),

    /// Cursor nested inside the sequence, drained by the traversal
    Cursor(Cursor<'a, T>),
}

impl<'a, T> From<&'a Node<T>> for Pulled<'a, T> {
    fn from(node: &'a Node<T>) -> Self {
        Pulled::Node(node)
    }
}

impl<'a, T> From<Cursor<'a, T>> for Pulled<'a, T> {
    fn from(cursor: Cursor<'a, T>) -> Self {
        Pulled::Cursor(cursor)
    }
}

/// Stateful iteration position over a sequence of elements
///
/// Wraps any iterator supplied by the caller whose items are nodes or
/// nested cursors. Elements pulled from a cursor are gone; there is no
/// rewind.
pub struct Cursor<'a, T> {
    id: CursorId,

    /// Elements pulled so far
    pulled: usize,

    /// Parent for leaves pulled directly off this cursor
    container: Option<&'a Node<T>>,

    inner: Box<dyn Iterator<Item = Pulled<'a, T>> + 'a>,
}

impl<'a, T> Cursor<'a, T> {
    /// Wrap an iterator of nodes and/or nested cursors
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Pulled<'a, T>>,
        I::IntoIter: 'a,
        I::Item: 'a,
    {
        Self {
            id: CursorId::fresh(),
            pulled: 0,
            container: None,
            inner: Box::new(items.into_iter().map(Into::into)),
        }
    }

    /// Cursor over the immediate elements of `node`
    pub fn over(node: &'a Node<T>) -> Self {
        Self::new(node.children())
    }

    /// Report `container` as the parent of leaves pulled directly off this cursor
    pub fn within(mut self, container: &'a Node<T>) -> Self {
        self.container = Some(container);
        self
    }

    /// Identity of this cursor
    pub fn id(&self) -> CursorId {
        self.id
    }

    /// Number of elements pulled so far
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// Parent given with [`Cursor::within`], if any
    pub fn container(&self) -> Option<&'a Node<T>> {
        self.container
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = Pulled<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.pulled += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("id", &self.id)
            .field("pulled", &self.pulled)
            .field("has_container", &self.container.is_some())
            .finish_non_exhaustive()
    }
}

/// What a cursor-linked traversal draws from
///
/// A plain value stands in where a cursor is expected: its leaves are
/// reported without a producing cursor.
#[derive(Debug)]
pub enum Source<'c, 'a, T> {
    /// Live cursor, advanced by the traversal
    Cursor(&'c mut Cursor<'a, T>),

    /// Value that is not a cursor
    Value(&'a Node<T>),
}

impl<'c, 'a, T> From<&'c mut Cursor<'a, T>> for Source<'c, 'a, T> {
    fn from(cursor: &'c mut Cursor<'a, T>) -> Self {
        Source::Cursor(cursor)
    }
}

impl<'a, T> From<&'a Node<T>> for Source<'_, 'a, T> {
    fn from(value: &'a Node<T>) -> Self {
        Source::Value(value)
    }
}

/// Leaf reported by a cursor-linked traversal
#[derive(Debug, PartialEq)]
pub struct CursorLinked<'a, T> {
    /// The leaf value
    pub value: &'a T,

    /// Innermost cursor whose pull produced the leaf (`None` for plain values)
    pub cursor: Option<CursorId>,

    /// Nearest enclosing aggregate
    pub parent: Option<&'a Node<T>>,
}

impl<'a, T> CursorLinked<'a, T> {
    /// Split into `(value, cursor, parent)`
    pub fn into_parts(self) -> (&'a T, Option<CursorId>, Option<&'a Node<T>>) {
        (self.value, self.cursor, self.parent)
    }
}

impl<T> Clone for CursorLinked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorLinked<'_, T> {}

/// Structural expansion of one pulled node
#[derive(Debug)]
struct Expansion<'a, T> {
    leaves: ParentFlatten<'a, T>,

    /// Cursor the node was pulled from
    producer: Option<CursorId>,

    /// Parent reported when the node is itself a leaf
    container: Option<&'a Node<T>>,
}

/// Lazy cursor-linked traversal, created by [`flatten_cursor`]
#[derive(Debug)]
pub struct CursorFlatten<'c, 'a, T> {
    /// Cursor still being drained; `None` once exhausted or for plain values
    cursor: Option<&'c mut Cursor<'a, T>>,

    /// Parent for leaves pulled directly off the source
    container: Option<&'a Node<T>>,

    /// Nested cursors being drained, innermost last
    nested: Vec<Cursor<'a, T>>,

    pending: Option<Expansion<'a, T>>,
}

impl<'c, 'a, T> CursorFlatten<'c, 'a, T> {
    fn new(source: Source<'c, 'a, T>, container: Option<&'a Node<T>>) -> Self {
        match source {
            Source::Cursor(cursor) => {
                debug!(cursor = %cursor.id(), pulled = cursor.pulled(), "cursor traversal started");
                Self {
                    cursor: Some(cursor),
                    container,
                    nested: Vec::new(),
                    pending: None,
                }
            }
            Source::Value(value) => Self {
                cursor: None,
                container,
                nested: Vec::new(),
                pending: Some(Expansion {
                    leaves: flatten_with_parent(value),
                    producer: None,
                    container,
                }),
            },
        }
    }

    /// Check whether the underlying cursor has been drained
    ///
    /// Always true for plain values.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Number of nested cursors currently being drained
    pub fn nesting(&self) -> usize {
        self.nested.len()
    }
}

impl<'a, T> Iterator for CursorFlatten<'_, 'a, T> {
    type Item = CursorLinked<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(expansion) = self.pending.as_mut() {
                if let Some((value, parent)) = expansion.leaves.next() {
                    return Some(CursorLinked {
                        value,
                        cursor: expansion.producer,
                        parent: parent.or(expansion.container),
                    });
                }
                self.pending = None;
            }

            // Innermost live cursor first
            let (element, producer, container) = match self.nested.last_mut() {
                Some(inner) => match inner.next() {
                    Some(element) => (element, inner.id(), inner.container()),
                    None => {
                        debug!(cursor = %inner.id(), pulled = inner.pulled(), "nested cursor exhausted");
                        self.nested.pop();
                        continue;
                    }
                },
                None => {
                    let cursor = self.cursor.as_mut()?;
                    match cursor.next() {
                        Some(element) => (element, cursor.id(), self.container.or(cursor.container())),
                        None => {
                            debug!(cursor = %cursor.id(), pulled = cursor.pulled(), "cursor exhausted");
                            self.cursor = None;
                            return None;
                        }
                    }
                }
            };

            match element {
                Pulled::Node(node) => {
                    self.pending = Some(Expansion {
                        leaves: flatten_with_parent(node),
                        producer: Some(producer),
                        container,
                    })
                }
                Pulled::Cursor(inner) => {
                    debug!(cursor = %inner.id(), outer = %producer, "nested cursor entered");
                    self.nested.push(inner);
                }
            }
        }
    }
}

impl<T> std::iter::FusedIterator for CursorFlatten<'_, '_, T> {}

/// Flatten whatever `source` produces into `(leaf, cursor, parent)` triples
///
/// For a [`Cursor`], elements are pulled one at a time as the consumer
/// asks for more. A pulled leaf is reported with `container` as its
/// parent (or the cursor's own [`Cursor::within`] parent when `container`
/// is `None`); a pulled aggregate is expanded depth-first and each of its
/// leaves is reported with its nearest enclosing aggregate. A pulled
/// [`Pulled::Cursor`] is drained before the outer cursor is pulled again,
/// and the leaves it produces carry its own id. An exhausted cursor simply
/// ends the sequence.
///
/// Stopping early leaves the remaining elements in the outer cursor, and a
/// later call resumes from there. Elements already pulled are not replayed,
/// and a nested cursor that was only partly drained is dropped with the
/// traversal.
///
/// For a plain value, the value's leaves are reported without a cursor,
/// and a bare leaf gets `container` as its parent.
///
/// ```
/// use nestlink::{flatten_cursor, Cursor, Node, Pulled};
///
/// let first = Node::leaf(1);
/// let inner = Node::list([Node::leaf(2), Node::leaf(3)]);
/// let nested = Cursor::over(&inner);
/// let nested_id = nested.id();
///
/// let mut cursor = Cursor::new([Pulled::from(&first), Pulled::from(nested)]);
/// let id = cursor.id();
///
/// let triples: Vec<_> = flatten_cursor(&mut cursor, None)
///     .map(|linked| linked.into_parts())
///     .collect();
/// assert_eq!(
///     triples,
///     vec![
///         (&1, Some(id), None),
///         (&2, Some(nested_id), None),
///         (&3, Some(nested_id), None),
///     ]
/// );
/// ```
pub fn flatten_cursor<'c, 'a, T>(
    source: impl Into<Source<'c, 'a, T>>,
    container: Option<&'a Node<T>>,
) -> CursorFlatten<'c, 'a, T> {
    CursorFlatten::new(source.into(), container)
}
