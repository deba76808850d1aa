//! The greeting operation.

/// The text returned by every successful `hello()` call.
pub const GREETING: &str = "Hello, World!";

/// Docstring the host shows for `hello`.
pub const HELLO_DOC: &str = "Print 'Hello, World!'";

/// Return a fresh copy of [`GREETING`].
///
/// Pure: no inputs, no shared state. Each call allocates its own `String`, so
/// concurrent callers never observe one another.
pub fn hello() -> String {
    GREETING.to_owned()
}
