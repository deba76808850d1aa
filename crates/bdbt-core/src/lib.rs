//! bdbt core -- the host-independent contract of the `bdbt` extension module.
//!
//! The `bdbt` module exposes exactly one capability, `hello`, which takes no
//! arguments and returns the text `"Hello, World!"`. This crate holds
//! everything about that contract that does not depend on the host
//! interpreter, so it can be tested with plain `cargo test`. The
//! `bdbt-python` crate is a thin PyO3 layer over it.
//!
//! # Architecture
//!
//! - **[`greeter`]**: The greeting constant and the `hello()` operation.
//! - **[`Capability`]**: A named, documented handler with a calling convention.
//! - **[`CapabilityTable`]**: Immutable, compile-time registration table.
//!   Lookup of an unregistered name fails with [`BdbtError::NotFound`].
//! - **[`ModuleDef`]**: Module identity (`"bdbt"`) plus its table. The
//!   process-wide definition is [`MODULE`].
//! - **[`BdbtError`]**: Error type covering argument rejection, unknown
//!   capability names, and table validation.
//!
//! # Example
//!
//! ```
//! use bdbt_core::{BdbtError, MODULE};
//!
//! assert_eq!(MODULE.call("hello", 0).unwrap(), "Hello, World!");
//! assert!(matches!(
//!     MODULE.call("hello", 1),
//!     Err(BdbtError::InvalidArgument { given: 1, .. })
//! ));
//! assert!(matches!(
//!     MODULE.call("goodbye", 0),
//!     Err(BdbtError::NotFound { .. })
//! ));
//! ```

#![deny(unsafe_code)]

mod capability;
pub mod greeter;
mod module;
mod table;

pub use capability::{CallConvention, Capability, Handler};
pub use module::{ModuleDef, CAPABILITIES, MODULE};
pub use table::CapabilityTable;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced when dispatching to a capability.
///
/// Host-side allocation or marshaling failures are not represented here; the
/// binding layer propagates those with the host's own error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BdbtError {
    /// A capability declared as taking no arguments was called with some.
    #[error("{capability}() takes no arguments ({given} given)")]
    InvalidArgument {
        /// Name of the capability that rejected the call.
        capability: &'static str,
        /// Number of arguments the caller supplied.
        given: usize,
    },

    /// No capability is registered under the requested name.
    #[error("unknown capability '{name}'")]
    NotFound {
        /// The name that was requested.
        name: String,
    },

    /// Two entries of a capability table share a name.
    #[error("capability '{name}' is registered more than once")]
    DuplicateCapability {
        /// The duplicated name.
        name: &'static str,
    },
}
