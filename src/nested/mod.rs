//! Linked flattening of nested structures
//!
//! Two lazy traversals over lists, tuples and sets nested to any depth:
//! - `flatten_with_parent`: (leaf, nearest parent) pairs
//! - `flatten_cursor`: (leaf, producing cursor, nearest parent) triples
//!
//! Both borrow the structure and never copy or mutate it. Parents are
//! references into the caller's structure, so `std::ptr::eq` identifies
//! the exact container a leaf came from.

mod cursor;
mod node;
mod traversal;

pub use cursor::{
    flatten_cursor, Cursor, CursorFlatten, CursorId, CursorLinked, Pulled, Source,
};
pub use node::{Children, Kind, Node};
pub use traversal::{flatten_with_parent, ParentFlatten};
