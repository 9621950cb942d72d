//! Component registry — rendering name to component.
//!
//! Built once at startup and shared read-only behind an `Arc`. A lookup miss
//! is reported to the caller, which degrades the single node instead of
//! failing the page.

use std::collections::HashMap;
use std::sync::Arc;

use super::RenderContext;
use super::markup::Markup;
use super::variant::DEFAULT_VARIANT;

/// A presentational component. Receives fields and params through the
/// render context and appends its markup.
pub trait Component: Send + Sync {
    /// Variant names this component renders. Must include `Default`.
    fn variants(&self) -> &'static [&'static str] {
        &[DEFAULT_VARIANT]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("component not registered: {0}")]
    NotFound(String),
}

impl crate::error::ErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_COMPONENT_NOT_FOUND",
        }
    }
}

#[derive(Default)]
pub struct Registry {
    components: HashMap<String, Arc<dyn Component>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `component` under `name`, returning any component it replaced.
    pub fn register(&mut self, name: impl Into<String>, component: Arc<dyn Component>) -> Option<Arc<dyn Component>> {
        self.components.insert(name.into(), component)
    }

    /// Look up a component by its exact rendering name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for unregistered names.
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn Component>, RegistryError> {
        self.components
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
