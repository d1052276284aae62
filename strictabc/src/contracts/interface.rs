//! Interface types: named sets of declared operations, some of them required.

use serde::{Deserialize, Serialize};

use super::operation::{mark_required, Operation, OperationMarker};

/// A type whose role is to declare operations specializations must provide.
///
/// Built once through [`InterfaceBuilder`] and never mutated afterwards.
/// Deserialization goes through the builder as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InterfaceRecord")]
pub struct InterfaceType {
    name: String,
    qualname: String,
    operations: Vec<Operation>,
}

impl InterfaceType {
    /// Starts declaring an interface.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> InterfaceBuilder {
        InterfaceBuilder::new(name)
    }

    /// Interface name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qualified name, used as the registry key.
    #[must_use]
    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    /// All declared operations in declaration order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Looks up a declared operation.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name() == name)
    }

    /// Required operations in declaration order.
    pub fn required_operations(&self) -> impl Iterator<Item = &OperationMarker> + '_ {
        self.operations
            .iter()
            .filter_map(Operation::marker)
            .filter(|marker| marker.required)
    }

    /// Looks up the marker of a required operation.
    #[must_use]
    pub fn required(&self, name: &str) -> Option<&OperationMarker> {
        self.required_operations().find(|marker| marker.name == name)
    }

    /// Names of required operations in declaration order.
    #[must_use]
    pub fn required_names(&self) -> Vec<&str> {
        self.required_operations()
            .map(|marker| marker.name.as_str())
            .collect()
    }

    /// Number of required operations.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.required_operations().count()
    }
}

#[derive(Deserialize)]
struct InterfaceRecord {
    name: String,
    #[serde(default)]
    qualname: Option<String>,
    #[serde(default)]
    operations: Vec<Operation>,
}

impl From<InterfaceRecord> for InterfaceType {
    fn from(record: InterfaceRecord) -> Self {
        let builder = InterfaceBuilder {
            name: record.name,
            qualname: record.qualname,
            operations: Vec::new(),
        };
        record
            .operations
            .into_iter()
            .fold(builder, InterfaceBuilder::operation)
            .build()
    }
}

/// Builder collecting an interface's body.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    name: String,
    qualname: Option<String>,
    operations: Vec<Operation>,
}

impl InterfaceBuilder {
    /// Creates a builder for an interface named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualname: None,
            operations: Vec::new(),
        }
    }

    /// Sets the qualified name (defaults to the name).
    #[must_use]
    pub fn qualname(mut self, qualname: impl Into<String>) -> Self {
        self.qualname = Some(qualname.into());
        self
    }

    /// Declares an operation.
    ///
    /// Redeclaring a name replaces the earlier declaration in place, so an
    /// unmarked redeclaration drops the requirement.
    #[must_use]
    pub fn operation(mut self, operation: Operation) -> Self {
        let position = self
            .operations
            .iter()
            .position(|existing| existing.name() == operation.name());
        match position {
            Some(idx) => self.operations[idx] = operation,
            None => self.operations.push(operation),
        }
        self
    }

    /// Declares an operation and marks it required.
    #[must_use]
    pub fn required(self, operation: Operation) -> Self {
        self.operation(mark_required(operation))
    }

    /// Finishes the declaration.
    #[must_use]
    pub fn build(self) -> InterfaceType {
        let qualname = self.qualname.unwrap_or_else(|| self.name.clone());
        InterfaceType {
            name: self.name,
            qualname,
            operations: self.operations,
        }
    }
}
