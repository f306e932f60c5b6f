//! Compiled-in plugin constructors addressed by manifest kind.
//!
//! Manifests never carry code. They name a kind, and the catalog maps that
//! kind to a zero-argument constructor registered by the host at startup.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{PluginError, PluginResult};
use crate::registry::DynastyPlugin;
use crate::safety;

type Factory = dyn Fn() -> Result<Rc<dyn DynastyPlugin>, String>;

/// Table of plugin constructors keyed by kind.
#[derive(Clone, Default)]
pub struct PluginCatalog {
    /// Kind → constructor.
    factories: BTreeMap<String, Rc<Factory>>,
}

impl fmt::Debug for PluginCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginCatalog")
            .field("kinds", &self.kinds())
            .finish()
    }
}

impl PluginCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fallible constructor for `kind`, replacing any previous one.
    pub fn register<F>(&mut self, kind: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Rc<dyn DynastyPlugin>, String> + 'static,
    {
        self.factories.insert(kind.to_string(), Rc::new(factory));
        self
    }

    /// Registers `P::default` as the constructor for `kind`.
    pub fn register_default<P>(&mut self, kind: &str) -> &mut Self
    where
        P: DynastyPlugin + Default + 'static,
    {
        self.register(kind, || Ok(Rc::new(P::default()) as Rc<dyn DynastyPlugin>))
    }

    /// Builder-style variant of [`register_default`](Self::register_default).
    pub fn with_default<P>(mut self, kind: &str) -> Self
    where
        P: DynastyPlugin + Default + 'static,
    {
        self.register_default::<P>(kind);
        self
    }

    /// Returns whether a kind is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Returns the registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Instantiates a plugin of the given kind.
    ///
    /// Constructor errors and panics are both reported as
    /// [`PluginError::ConstructionFailed`].
    pub fn instantiate(&self, kind: &str) -> PluginResult<Rc<dyn DynastyPlugin>> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| PluginError::UnknownKind {
                kind: kind.to_string(),
            })?;

        safety::isolate(|| factory()).map_err(|reason| PluginError::ConstructionFailed {
            kind: kind.to_string(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Census;

    impl DynastyPlugin for Census {}

    #[test]
    fn test_instantiate_registered_kind() {
        let catalog = PluginCatalog::new().with_default::<Census>("census");
        assert!(catalog.contains("census"));
        assert_eq!(catalog.kinds(), vec!["census"]);

        let plugin = catalog.instantiate("census").expect("constructed");
        assert_eq!(plugin.metadata().name, "Census");
    }

    #[test]
    fn test_unknown_kind() {
        let catalog = PluginCatalog::new();
        let err = catalog.instantiate("census").unwrap_err();
        assert_eq!(err, PluginError::UnknownKind { kind: "census".into() });
    }

    #[test]
    fn test_constructor_failures_are_isolated() {
        let mut catalog = PluginCatalog::new();
        catalog
            .register("broken", || Err("missing treasury table".to_string()))
            .register("panicky", || panic!("constructor exploded"));

        let broken = catalog.instantiate("broken").unwrap_err();
        assert_eq!(
            broken,
            PluginError::ConstructionFailed {
                kind: "broken".into(),
                reason: "missing treasury table".into(),
            }
        );

        let panicky = catalog.instantiate("panicky").unwrap_err();
        assert!(panicky.to_string().contains("constructor exploded"));
    }
}
