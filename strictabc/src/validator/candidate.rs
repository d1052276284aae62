//! The transient description of a type being declared.

use std::collections::HashMap;
use std::sync::Arc;

use super::member::Member;
use crate::contracts::InterfaceType;

/// A type under declaration: its interface bases and its own members.
///
/// Exists only for the validation pass; members are the type's own
/// namespace, never merged with ancestors.
#[derive(Debug, Clone)]
pub struct SpecializationCandidate {
    name: String,
    qualname: Option<String>,
    bases: Vec<Arc<InterfaceType>>,
    members: Vec<Member>,
}

impl SpecializationCandidate {
    /// Starts describing a type named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualname: None,
            bases: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Sets the qualified name used in mismatch records.
    #[must_use]
    pub fn with_qualname(mut self, qualname: impl Into<String>) -> Self {
        self.qualname = Some(qualname.into());
        self
    }

    /// Adds an interface base.
    #[must_use]
    pub fn with_base(mut self, base: Arc<InterfaceType>) -> Self {
        self.bases.push(base);
        self
    }

    /// Adds interface bases in order.
    #[must_use]
    pub fn with_bases(mut self, bases: impl IntoIterator<Item = Arc<InterfaceType>>) -> Self {
        self.bases.extend(bases);
        self
    }

    /// Declares a member. A later member with the same name replaces the
    /// earlier one in place.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        let position = self.members.iter().position(|m| m.name == member.name);
        match position {
            Some(idx) => self.members[idx] = member,
            None => self.members.push(member),
        }
        self
    }

    /// Declares several members.
    #[must_use]
    pub fn with_members(self, members: impl IntoIterator<Item = Member>) -> Self {
        members.into_iter().fold(self, Self::with_member)
    }

    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qualified name, defaulting to the name.
    #[must_use]
    pub fn qualname(&self) -> &str {
        self.qualname.as_deref().unwrap_or(&self.name)
    }

    /// Declared interface bases, duplicates included.
    #[must_use]
    pub fn bases(&self) -> &[Arc<InterfaceType>] {
        &self.bases
    }

    /// Declared members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// True if at least one interface base was declared.
    #[must_use]
    pub fn has_interface_bases(&self) -> bool {
        !self.bases.is_empty()
    }

    /// Interface bases in declaration order with repeats removed.
    ///
    /// Repeats are detected by identity, not by name.
    #[must_use]
    pub fn unique_bases(&self) -> Vec<&Arc<InterfaceType>> {
        let mut unique: Vec<&Arc<InterfaceType>> = Vec::with_capacity(self.bases.len());
        for base in &self.bases {
            if !unique.iter().any(|seen| Arc::ptr_eq(seen, base)) {
                unique.push(base);
            }
        }
        unique
    }

    /// Index of members by name.
    #[must_use]
    pub fn member_index(&self) -> HashMap<&str, &Member> {
        self.members.iter().map(|m| (m.name.as_str(), m)).collect()
    }
}
