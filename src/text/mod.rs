//! Text helpers for schema identifiers and date strings

mod camel;
mod iso8601;

pub use camel::split_camel_case;
pub use iso8601::{is_iso8601, Iso8601Check, DEFAULT_FORMAT};
