//! Keyed registry of interchangeable behaviours.
//!
//! A `Registry<T>` maps a case-sensitive string key to either a zero-argument
//! constructor or an already configured shared instance of `T` (usually a trait
//! object such as `dyn OrderingStrategy`). Re-registering a key replaces the
//! previous binding (last write wins). Resolution is a pure lookup.
//!
//! Registries are built explicitly and passed to the orchestrators that need
//! them; there is no process-wide instance.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, StratlabError};

type Constructor<T> = Box<dyn Fn() -> Arc<T> + Send + Sync>;

enum Binding<T: ?Sized> {
    Constructor(Constructor<T>),
    Instance(Arc<T>),
}

/// String-keyed registry of behaviours of type `T`.
pub struct Registry<T: ?Sized> {
    role: String,
    bindings: BTreeMap<String, Binding<T>>,
}

impl<T: ?Sized> Registry<T> {
    /// Create an empty registry. `role` names what the keys select
    /// (e.g. "ordering strategy") and appears in `UnknownKey` errors.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            bindings: BTreeMap::new(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Bind `key` to a constructor invoked on every `resolve`.
    ///
    /// Returns `true` if an existing binding was replaced.
    pub fn register<F>(&mut self, key: impl Into<String>, constructor: F) -> bool
    where
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        self.bind(key.into(), Binding::Constructor(Box::new(constructor)))
    }

    /// Bind `key` to a configured instance shared by every `resolve`.
    ///
    /// Returns `true` if an existing binding was replaced.
    pub fn register_instance(&mut self, key: impl Into<String>, instance: Arc<T>) -> bool {
        self.bind(key.into(), Binding::Instance(instance))
    }

    fn bind(&mut self, key: String, binding: Binding<T>) -> bool {
        let replaced = self.bindings.insert(key.clone(), binding).is_some();
        if replaced {
            tracing::debug!(role = %self.role, %key, "binding replaced");
        }
        replaced
    }

    /// Look up the behaviour bound to `key` (exact, case-sensitive match).
    pub fn resolve(&self, key: &str) -> Result<Arc<T>> {
        match self.bindings.get(key) {
            Some(Binding::Constructor(make)) => Ok(make()),
            Some(Binding::Instance(instance)) => Ok(Arc::clone(instance)),
            None => Err(StratlabError::UnknownKey {
                role: self.role.clone(),
                key: key.to_string(),
                available: self.keys().map(str::to_string).collect(),
            }),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("role", &self.role)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
