//! Call tracing
//!
//! Wraps a function so every call logs its name and arguments at debug
//! level before forwarding. Return values (and panics) pass through
//! untouched.

use std::fmt;

use tracing::debug;

/// Log target used for traced calls
pub const TARGET: &str = "nestlink::trace";

/// Function wrapped with call tracing
///
/// Arguments are passed as a single value; use a tuple for several.
#[derive(Clone)]
pub struct Traced<F> {
    name: &'static str,
    func: F,
}

impl<F> Traced<F> {
    /// Wrap `func`, logging calls under `name`
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }

    /// Name used in log records
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Log the call, then forward it
    pub fn call<A, R>(&self, args: A) -> R
    where
        A: fmt::Debug,
        F: Fn(A) -> R,
    {
        debug!(target: TARGET, function = self.name, args = ?args, "call");
        (self.func)(args)
    }

    /// Unwrap the inner function
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> fmt::Debug for Traced<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced").field("name", &self.name).finish()
    }
}

/// Wrap `func` in a closure that logs each call before forwarding it
///
/// ```
/// use nestlink::trace;
///
/// let add = trace("add", |(a, b): (i32, i32)| a + b);
/// assert_eq!(add((2, 3)), 5);
/// ```
pub fn trace<A, R, F>(name: &'static str, func: F) -> impl Fn(A) -> R
where
    A: fmt::Debug,
    F: Fn(A) -> R,
{
    let traced = Traced::new(name, func);
    move |args: A| traced.call(args)
}
