//! Capability descriptors.
//!
//! A [`Capability`] is one entry of a module's registration table: the name
//! the host sees, the docstring it shows, the argument shape it accepts, and
//! the Rust function that produces the result.

use crate::BdbtError;

/// Function producing a capability's result.
pub type Handler = fn() -> String;

/// Argument shape a capability accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallConvention {
    /// The capability takes no arguments. Any positional or keyword argument
    /// is rejected with [`BdbtError::InvalidArgument`].
    NoArgs,
}

impl CallConvention {
    /// Check `given` arguments against this convention.
    pub fn check(self, capability: &'static str, given: usize) -> Result<(), BdbtError> {
        match self {
            CallConvention::NoArgs if given == 0 => Ok(()),
            CallConvention::NoArgs => Err(BdbtError::InvalidArgument { capability, given }),
        }
    }
}

/// A named, callable operation exposed to the host.
#[derive(Debug, Clone, Copy)]
pub struct Capability {
    name: &'static str,
    doc: &'static str,
    convention: CallConvention,
    handler: Handler,
}

impl Capability {
    /// Describe a capability. `const` so tables can live in `static`s.
    pub const fn new(
        name: &'static str,
        doc: &'static str,
        convention: CallConvention,
        handler: Handler,
    ) -> Self {
        Self {
            name,
            doc,
            convention,
            handler,
        }
    }

    /// Name the host uses to look this capability up.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line docstring.
    pub fn doc(&self) -> &'static str {
        self.doc
    }

    /// Declared argument shape.
    pub fn convention(&self) -> CallConvention {
        self.convention
    }

    /// Invoke with `argc` caller-supplied arguments.
    ///
    /// The argument count is checked before the handler runs, so a rejected
    /// call produces no result at all.
    ///
    /// # Errors
    ///
    /// [`BdbtError::InvalidArgument`] if `argc` violates the convention.
    pub fn invoke(&self, argc: usize) -> Result<String, BdbtError> {
        if let Err(err) = self.convention.check(self.name, argc) {
            tracing::debug!(capability = self.name, given = argc, "rejected call: {err}");
            return Err(err);
        }
        tracing::trace!(capability = self.name, "dispatch");
        Ok((self.handler)())
    }
}
