//! Container locator seam
//!
//! Callers address deployment units either by container id or by alias. A
//! `ContainerLocator` turns that raw value into the canonical container id the
//! runtime knows about, or fails.

use std::collections::{HashMap, HashSet};

use crate::errors::{CaseViewError, Result};

pub trait ContainerLocator: Send + Sync {
    /// Resolve a raw container id or alias to a canonical container id
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if nothing matches `container_id`.
    fn resolve(&self, container_id: &str) -> Result<String>;
}

/// Locator backed by an explicit set of deployed containers and aliases
///
/// Container ids resolve to themselves; an alias resolves to the container it
/// was last pointed at.
///
/// ```
/// use caseview_core::container::{ContainerLocator, ContainerRegistry};
///
/// let registry = ContainerRegistry::new()
///     .with_container("claims_1.0.1")
///     .with_alias("claims", "claims_1.0.1");
///
/// assert_eq!(registry.resolve("claims").unwrap(), "claims_1.0.1");
/// assert!(registry.resolve("billing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    containers: HashSet<String>,
    aliases: HashMap<String, String>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.containers.insert(container_id.into());
        self
    }

    /// Point `alias` at `container_id`, registering the container if needed
    pub fn with_alias(mut self, alias: impl Into<String>, container_id: impl Into<String>) -> Self {
        let container_id = container_id.into();
        self.containers.insert(container_id.clone());
        self.aliases.insert(alias.into(), container_id);
        self
    }
}

impl ContainerLocator for ContainerRegistry {
    fn resolve(&self, container_id: &str) -> Result<String> {
        if self.containers.contains(container_id) {
            return Ok(container_id.to_string());
        }
        self.aliases.get(container_id).cloned().ok_or_else(|| {
            CaseViewError::UnknownContainer {
                container_id: container_id.to_string(),
            }
            .into()
        })
    }
}
