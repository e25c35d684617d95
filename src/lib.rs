//! # Linked flattening of nested structures
//!
//! Helpers for schema-processing code that walks nested lists, tuples and
//! sets while remembering where every value came from.
//!
//! ## Core traversals
//!
//! 1. **Parent linkage**: `flatten_with_parent` yields each leaf with its
//!    nearest enclosing container, depth-first and left to right
//! 2. **Cursor linkage**: `flatten_cursor` pulls from a live cursor and
//!    yields each leaf with the cursor that produced it and its parent
//!
//! Both are lazy iterators over borrowed structure: nothing is copied,
//! nothing is computed before the consumer asks for it.
//!
//! ## Usage Example
//!
//! ```
//! use nestlink::{flatten_with_parent, Node, Scalar};
//!
//! let root: Node<Scalar> = "[1, [2, 3], 4]".parse()?;
//! let pairs: Vec<String> = flatten_with_parent(&root)
//!     .map(|(leaf, parent)| format!("{} in {}", leaf, parent.unwrap()))
//!     .collect();
//! assert_eq!(pairs[1], "2 in [2, 3]");
//! # Ok::<(), nestlink::LiteralError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod nested;     // Nested structures and linked traversals
pub mod literal;    // Textual structure literals
pub mod text;       // Date validation and identifier splitting
pub mod trace;      // Call tracing wrapper

// Re-exports for convenience
pub use literal::{LiteralError, Scalar};
pub use nested::{
    flatten_cursor, flatten_with_parent, Cursor, CursorFlatten, CursorId, CursorLinked, Kind,
    Node, ParentFlatten, Pulled, Source,
};
pub use text::{is_iso8601, split_camel_case, Iso8601Check};
pub use trace::{trace, Traced};
