//! Registry of declared interfaces, keyed by qualified name.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::interface::InterfaceType;
use crate::errors::RegistryError;

/// Registration metadata for an interface.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredInterface {
    /// The interface itself.
    pub interface: Arc<InterfaceType>,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the interface was registered.
    pub registered_at: DateTime<Utc>,
}

impl RegisteredInterface {
    fn new(interface: Arc<InterfaceType>, description: Option<String>) -> Self {
        Self {
            interface,
            description,
            registered_at: Utc::now(),
        }
    }
}

/// Requirement changes between two interfaces.
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceCompatibilityReport {
    /// Source interface.
    pub from: String,
    /// Target interface.
    pub to: String,
    /// Changes that existing specializations would fail.
    pub breaking_changes: Vec<String>,
    /// Changes that loosen the contract.
    pub warnings: Vec<String>,
}

impl InterfaceCompatibilityReport {
    /// True when no breaking changes were detected.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.breaking_changes.is_empty()
    }

    /// Human readable summary string.
    #[must_use]
    pub fn summary(&self) -> String {
        let status = if self.is_compatible() {
            "compatible"
        } else {
            "breaking"
        };
        format!(
            "Interface diff {}->{}: {} (breaking={}, warnings={})",
            self.from,
            self.to,
            status,
            self.breaking_changes.len(),
            self.warnings.len()
        )
    }
}

/// In-memory registry of interface types.
///
/// Written when interfaces are declared and read when specializations
/// resolve their bases.
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
    entries: RwLock<HashMap<String, RegisteredInterface>>,
}

impl InterfaceRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all registered entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Registers an interface under its qualified name.
    ///
    /// Registering an identical interface again returns the handle already
    /// stored, so identity-based base de-duplication keeps working.
    pub fn register(
        &self,
        interface: impl Into<Arc<InterfaceType>>,
    ) -> Result<Arc<InterfaceType>, RegistryError> {
        self.register_with_description(interface, None)
    }

    /// Registers an interface with a description.
    pub fn register_with_description(
        &self,
        interface: impl Into<Arc<InterfaceType>>,
        description: Option<String>,
    ) -> Result<Arc<InterfaceType>, RegistryError> {
        let interface = interface.into();
        let qualname = interface.qualname().to_string();

        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&qualname) {
            if *existing.interface == *interface {
                return Ok(Arc::clone(&existing.interface));
            }
            return Err(RegistryError::conflict(qualname));
        }

        tracing::debug!(
            interface = %qualname,
            required = interface.required_count(),
            "Registered interface"
        );
        entries.insert(
            qualname,
            RegisteredInterface::new(Arc::clone(&interface), description),
        );
        Ok(interface)
    }

    /// Fetch an interface by qualified name.
    #[must_use]
    pub fn get(&self, qualname: &str) -> Option<Arc<InterfaceType>> {
        self.entries
            .read()
            .get(qualname)
            .map(|entry| Arc::clone(&entry.interface))
    }

    /// Fetch an interface, failing if it is not registered.
    pub fn require(&self, qualname: &str) -> Result<Arc<InterfaceType>, RegistryError> {
        self.get(qualname)
            .ok_or_else(|| RegistryError::not_registered(qualname))
    }

    /// Fetch registration metadata.
    #[must_use]
    pub fn entry(&self, qualname: &str) -> Option<RegisteredInterface> {
        self.entries.read().get(qualname).cloned()
    }

    /// True if `qualname` names a registered interface.
    #[must_use]
    pub fn contains(&self, qualname: &str) -> bool {
        self.entries.read().contains_key(qualname)
    }

    /// Return all registrations sorted by qualified name.
    #[must_use]
    pub fn list(&self) -> Vec<RegisteredInterface> {
        let entries = self.entries.read();
        let mut result: Vec<_> = entries.values().cloned().collect();
        result.sort_by(|a, b| a.interface.qualname().cmp(b.interface.qualname()));
        result
    }

    /// Resolves a declared base list to the interfaces among it.
    ///
    /// Names that are not registered interfaces (ordinary base types) are
    /// skipped. Order and repeats are preserved.
    #[must_use]
    pub fn resolve_bases<S: AsRef<str>>(&self, base_names: &[S]) -> Vec<Arc<InterfaceType>> {
        let entries = self.entries.read();
        base_names
            .iter()
            .filter_map(|name| entries.get(name.as_ref()))
            .map(|entry| Arc::clone(&entry.interface))
            .collect()
    }

    /// Compute requirement compatibility between two registered interfaces.
    pub fn diff(&self, from: &str, to: &str) -> Result<InterfaceCompatibilityReport, RegistryError> {
        let left = self.require(from)?;
        let right = self.require(to)?;

        let mut breaking = Vec::new();
        let mut warnings = Vec::new();

        for marker in left.required_operations() {
            if right.required(&marker.name).is_none() {
                warnings.push(format!("Requirement '{}' removed", marker.name));
            }
        }

        for marker in right.required_operations() {
            match left.required(&marker.name) {
                None => breaking.push(format!("Requirement '{}' added", marker.name)),
                Some(old) if old.signature != marker.signature => breaking.push(format!(
                    "Requirement '{}' changed signature {} -> {}",
                    marker.name, old.signature, marker.signature
                )),
                Some(_) => {}
            }
        }

        Ok(InterfaceCompatibilityReport {
            from: from.to_string(),
            to: to.to_string(),
            breaking_changes: breaking,
            warnings,
        })
    }

    /// Returns the number of registered interfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
