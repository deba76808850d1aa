//! The `bdbt` module definition.

use crate::capability::{CallConvention, Capability};
use crate::greeter;
use crate::table::CapabilityTable;
use crate::BdbtError;

static BDBT_ENTRIES: [Capability; 1] = [Capability::new(
    "hello",
    greeter::HELLO_DOC,
    CallConvention::NoArgs,
    greeter::hello,
)];

/// Registration table of the `bdbt` module: exactly `hello`.
pub static CAPABILITIES: CapabilityTable = CapabilityTable::new(&BDBT_ENTRIES);

/// The `bdbt` module as the host loads it.
pub static MODULE: ModuleDef = ModuleDef::new("bdbt", None, &CAPABILITIES);

/// Identity and registration table of a loadable module.
#[derive(Debug, Clone, Copy)]
pub struct ModuleDef {
    name: &'static str,
    doc: Option<&'static str>,
    capabilities: &'static CapabilityTable,
}

impl ModuleDef {
    /// Describe a module.
    pub const fn new(
        name: &'static str,
        doc: Option<&'static str>,
        capabilities: &'static CapabilityTable,
    ) -> Self {
        Self {
            name,
            doc,
            capabilities,
        }
    }

    /// Load-time identifier the host imports the module under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Module docstring, if any.
    pub fn doc(&self) -> Option<&'static str> {
        self.doc
    }

    /// The module's registration table.
    pub fn capabilities(&self) -> &'static CapabilityTable {
        self.capabilities
    }

    /// Dispatch `name` with `argc` arguments through the table.
    ///
    /// # Errors
    ///
    /// See [`CapabilityTable::call`].
    pub fn call(&self, name: &str, argc: usize) -> Result<String, BdbtError> {
        self.capabilities.call(name, argc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_identity() {
        assert_eq!(MODULE.name(), "bdbt");
        assert_eq!(MODULE.doc(), None);
    }

    #[test]
    fn exactly_one_capability_named_hello() {
        let caps = MODULE.capabilities();
        assert_eq!(caps.len(), 1);
        assert_eq!(caps.names().collect::<Vec<_>>(), vec!["hello"]);
        assert!(caps.validate().is_ok());
    }

    #[test]
    fn hello_descriptor_matches_registration() {
        let hello = CAPABILITIES.get("hello").unwrap();
        assert_eq!(hello.doc(), "Print 'Hello, World!'");
        assert_eq!(hello.convention(), CallConvention::NoArgs);
    }

    #[test]
    fn call_hello_through_module() {
        assert_eq!(MODULE.call("hello", 0).unwrap(), greeter::GREETING);
    }

    #[test]
    fn module_definition_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModuleDef>();
        assert_send_sync::<CapabilityTable>();
        assert_send_sync::<Capability>();
    }
}
