//! Capability registry and application handle.

use std::collections::BTreeMap;
use std::sync::Arc;

/// A named, reusable UI element a theme exposes to rendered pages.
///
/// The engine only stores capabilities and resolves them by name; what a
/// capability emits is entirely up to the theme that registered it.
pub trait Capability: Send + Sync {
    /// Render the capability with the given props markup.
    fn render(&self, props: &str) -> String;
}

/// Named capability map with deterministic iteration order.
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    entries: BTreeMap<String, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Look up a capability by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Capability>> {
        self.entries.get(name)
    }

    /// Whether a capability is registered under a name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered capability names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of registered capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Application handle threaded through theme composition.
///
/// An explicit registry object passed by handle — never ambient global
/// state — so that registration order stays visible. Mutated only during
/// composition; afterwards the registry moves into the effective theme and
/// is read-only.
#[derive(Debug, Default)]
pub struct AppHandle {
    registry: CapabilityRegistry,
}

impl AppHandle {
    /// Create an empty handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability under a name.
    ///
    /// Last write wins: registering under a name that is already taken
    /// silently replaces the earlier capability. A debug event is emitted
    /// so replacements show up in build logs.
    pub fn register(&mut self, name: impl Into<String>, capability: Arc<dyn Capability>) {
        let name = name.into();
        if self
            .registry
            .entries
            .insert(name.clone(), capability)
            .is_some()
        {
            tracing::debug!(capability = %name, "capability re-registered, later registration wins");
        }
    }

    /// Look up a capability registered so far.
    ///
    /// Lets later enhancers observe registrations made by earlier ones.
    #[must_use]
    pub fn capability(&self, name: &str) -> Option<&Arc<dyn Capability>> {
        self.registry.get(name)
    }

    /// Consume the handle, yielding its registry.
    pub(crate) fn into_registry(self) -> CapabilityRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl Capability for Fixed {
        fn render(&self, _props: &str) -> String {
            self.0.to_owned()
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut app = AppHandle::new();
        app.register("Badge", Arc::new(Fixed("badge")));
        assert_eq!(app.capability("Badge").unwrap().render(""), "badge");
        assert!(app.capability("Missing").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut app = AppHandle::new();
        app.register("Badge", Arc::new(Fixed("first")));
        app.register("Badge", Arc::new(Fixed("second")));
        let registry = app.into_registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Badge").unwrap().render(""), "second");
    }

    #[test]
    fn test_names_sorted() {
        let mut app = AppHandle::new();
        app.register("Zeta", Arc::new(Fixed("z")));
        app.register("Alpha", Arc::new(Fixed("a")));
        assert_eq!(app.into_registry().names(), vec!["Alpha", "Zeta"]);
    }
}
