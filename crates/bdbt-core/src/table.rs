//! Immutable capability registration table.
//!
//! A [`CapabilityTable`] borrows a `'static` slice of [`Capability`]
//! descriptors. It is built once at compile time and never mutated, so it can
//! be shared across threads without synchronization.

use crate::capability::Capability;
use crate::BdbtError;

/// Fixed mapping from capability name to descriptor.
///
/// Tables are tiny, so lookup is a linear scan in registration order.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityTable {
    entries: &'static [Capability],
}

impl CapabilityTable {
    /// Wrap a static slice of descriptors.
    pub const fn new(entries: &'static [Capability]) -> Self {
        Self { entries }
    }

    /// Look up a capability by name.
    ///
    /// # Errors
    ///
    /// [`BdbtError::NotFound`] if no entry carries `name`.
    pub fn get(&self, name: &str) -> Result<&'static Capability, BdbtError> {
        self.entries
            .iter()
            .find(|cap| cap.name() == name)
            .ok_or_else(|| BdbtError::NotFound {
                name: name.to_owned(),
            })
    }

    /// Look up `name` and invoke it with `argc` arguments.
    ///
    /// # Errors
    ///
    /// [`BdbtError::NotFound`] for an unregistered name, or whatever the
    /// capability's own [`invoke`](Capability::invoke) returns.
    pub fn call(&self, name: &str, argc: usize) -> Result<String, BdbtError> {
        let cap = match self.get(name) {
            Ok(cap) => cap,
            Err(err) => {
                tracing::debug!(capability = name, "rejected call: {err}");
                return Err(err);
            }
        };
        cap.invoke(argc)
    }

    /// Whether a capability named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(Capability::name)
    }

    /// Registered descriptors, in registration order.
    pub fn iter(&self) -> std::slice::Iter<'static, Capability> {
        self.entries.iter()
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every name appears once.
    ///
    /// # Errors
    ///
    /// [`BdbtError::DuplicateCapability`] naming the first repeated entry.
    pub fn validate(&self) -> Result<(), BdbtError> {
        for (i, cap) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|prev| prev.name() == cap.name()) {
                return Err(BdbtError::DuplicateCapability { name: cap.name() });
            }
        }
        Ok(())
    }
}

impl IntoIterator for &CapabilityTable {
    type Item = &'static Capability;
    type IntoIter = std::slice::Iter<'static, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CallConvention;

    fn ping() -> String {
        "pong".to_owned()
    }

    fn echo() -> String {
        "echo".to_owned()
    }

    static TWO: [Capability; 2] = [
        Capability::new("ping", "Reply pong.", CallConvention::NoArgs, ping),
        Capability::new("echo", "Reply echo.", CallConvention::NoArgs, echo),
    ];

    static DUPLICATED: [Capability; 3] = [
        Capability::new("ping", "", CallConvention::NoArgs, ping),
        Capability::new("echo", "", CallConvention::NoArgs, echo),
        Capability::new("ping", "", CallConvention::NoArgs, echo),
    ];

    static NONE: [Capability; 0] = [];

    #[test]
    fn get_finds_registered_entries() {
        let table = CapabilityTable::new(&TWO);
        assert_eq!(table.get("echo").unwrap().doc(), "Reply echo.");
        assert!(table.contains("ping"));
    }

    #[test]
    fn get_unknown_name_is_not_found() {
        let table = CapabilityTable::new(&TWO);
        let err = table.get("pang").unwrap_err();
        assert_eq!(
            err,
            BdbtError::NotFound {
                name: "pang".to_owned()
            }
        );
        assert!(!table.contains("pang"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = CapabilityTable::new(&TWO);
        assert!(matches!(table.get("PING"), Err(BdbtError::NotFound { .. })));
    }

    #[test]
    fn call_dispatches_to_matching_handler() {
        let table = CapabilityTable::new(&TWO);
        assert_eq!(table.call("ping", 0).unwrap(), "pong");
        assert_eq!(table.call("echo", 0).unwrap(), "echo");
    }

    #[test]
    fn call_checks_name_before_arguments() {
        let table = CapabilityTable::new(&TWO);
        assert!(matches!(
            table.call("missing", 3),
            Err(BdbtError::NotFound { .. })
        ));
    }

    #[test]
    fn names_preserve_registration_order() {
        let table = CapabilityTable::new(&TWO);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["ping", "echo"]);
        assert_eq!(table.len(), 2);
        assert_eq!((&table).into_iter().count(), 2);
    }

    #[test]
    fn validate_reports_first_duplicate() {
        assert!(CapabilityTable::new(&TWO).validate().is_ok());
        assert_eq!(
            CapabilityTable::new(&DUPLICATED).validate(),
            Err(BdbtError::DuplicateCapability { name: "ping" })
        );
    }

    #[test]
    fn empty_table_finds_nothing() {
        let table = CapabilityTable::new(&NONE);
        assert!(table.is_empty());
        assert!(table.validate().is_ok());
        assert!(matches!(table.call("hello", 0), Err(BdbtError::NotFound { .. })));
    }
}
