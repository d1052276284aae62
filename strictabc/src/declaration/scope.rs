//! A host for declarations: interfaces in, validated types out.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::hook::{DeclarationHook, StrictDeclarationHook};
use crate::config::ValidatorConfig;
use crate::contracts::{InterfaceRegistry, InterfaceType};
use crate::errors::{RegistryError, StrictInterfaceError};
use crate::validator::{Member, SpecializationCandidate};

/// A type whose declaration every hook accepted.
#[derive(Debug, Clone)]
pub struct DeclaredType {
    /// Short name.
    pub name: String,
    /// Qualified name.
    pub qualname: String,
    /// Interface bases, de-duplicated, in declaration order.
    pub interfaces: Vec<Arc<InterfaceType>>,
    /// The type's own members.
    pub members: Vec<Member>,
}

impl DeclaredType {
    fn from_candidate(candidate: &SpecializationCandidate) -> Self {
        Self {
            name: candidate.name().to_string(),
            qualname: candidate.qualname().to_string(),
            interfaces: candidate.unique_bases().into_iter().cloned().collect(),
            members: candidate.members().to_vec(),
        }
    }

    /// Looks up one of the type's own members.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Owns an interface registry and runs declaration hooks.
///
/// Hooks run in the order they were added. The first rejection stops the
/// declaration and nothing is recorded.
pub struct DeclarationScope {
    registry: Arc<InterfaceRegistry>,
    hooks: Vec<Arc<dyn DeclarationHook>>,
    types: RwLock<HashMap<String, Arc<DeclaredType>>>,
}

impl DeclarationScope {
    /// Creates a scope with no hooks.
    #[must_use]
    pub fn new(registry: Arc<InterfaceRegistry>) -> Self {
        Self {
            registry,
            hooks: Vec::new(),
            types: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a scope enforcing strict interfaces with `config`.
    #[must_use]
    pub fn strict(config: ValidatorConfig) -> Self {
        let mut scope = Self::new(Arc::new(InterfaceRegistry::new()));
        scope.add_hook(Arc::new(StrictDeclarationHook::new(config)));
        scope
    }

    /// Adds a hook.
    pub fn add_hook(&mut self, hook: Arc<dyn DeclarationHook>) {
        self.hooks.push(hook);
    }

    /// Returns the interface registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<InterfaceRegistry> {
        &self.registry
    }

    /// Declares an interface type.
    pub fn declare_interface(
        &self,
        interface: InterfaceType,
    ) -> Result<Arc<InterfaceType>, RegistryError> {
        self.registry.register(interface)
    }

    /// Declares a type. Every hook sees the candidate once; the type exists
    /// only if all of them accept.
    pub fn declare(
        &self,
        candidate: &SpecializationCandidate,
    ) -> Result<Arc<DeclaredType>, StrictInterfaceError> {
        for hook in &self.hooks {
            hook.on_declare(candidate)?;
        }

        let declared = Arc::new(DeclaredType::from_candidate(candidate));
        let previous = self
            .types
            .write()
            .insert(declared.qualname.clone(), Arc::clone(&declared));
        if previous.is_some() {
            tracing::debug!(type_name = %declared.qualname, "Redeclared type");
        }
        Ok(declared)
    }

    /// Declares a type whose bases are given by name.
    ///
    /// Names that are not registered interfaces are treated as ordinary
    /// bases and do not take part in validation.
    pub fn declare_named<S: AsRef<str>>(
        &self,
        name: &str,
        base_names: &[S],
        members: impl IntoIterator<Item = Member>,
    ) -> Result<Arc<DeclaredType>, StrictInterfaceError> {
        let candidate = SpecializationCandidate::new(name)
            .with_bases(self.registry.resolve_bases(base_names))
            .with_members(members);
        self.declare(&candidate)
    }

    /// Fetches a declared type by qualified name.
    #[must_use]
    pub fn get(&self, qualname: &str) -> Option<Arc<DeclaredType>> {
        self.types.read().get(qualname).cloned()
    }

    /// True if a type with `qualname` has been declared.
    #[must_use]
    pub fn contains(&self, qualname: &str) -> bool {
        self.types.read().contains_key(qualname)
    }

    /// Number of declared types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// True if no types have been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

impl std::fmt::Debug for DeclarationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarationScope")
            .field("interfaces", &self.registry.len())
            .field("hooks", &self.hooks.len())
            .field("types", &self.types.read().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::MockDeclarationHook;
    use crate::testing::{con_foo, foo_interface_type};
    use crate::validator::ReportBuilder;

    fn rejection() -> StrictInterfaceError {
        let mut report = ReportBuilder::new();
        report.missing("bar");
        StrictInterfaceError::new("ConFoo", report.finish().unwrap())
    }

    #[test]
    fn test_every_hook_runs_once() {
        let mut first = MockDeclarationHook::new();
        first.expect_on_declare().times(1).returning(|_| Ok(()));
        let mut second = MockDeclarationHook::new();
        second.expect_on_declare().times(1).returning(|_| Ok(()));

        let mut scope = DeclarationScope::new(Arc::new(InterfaceRegistry::new()));
        scope.add_hook(Arc::new(first));
        scope.add_hook(Arc::new(second));

        let declared = scope.declare(&con_foo(vec![])).unwrap();
        assert_eq!(declared.name, "ConFoo");
        assert!(scope.contains("ConFoo"));
    }

    #[test]
    fn test_rejection_leaves_no_type() {
        let mut reject = MockDeclarationHook::new();
        reject.expect_on_declare().times(1).returning(|_| Err(rejection()));
        let mut after = MockDeclarationHook::new();
        after.expect_on_declare().times(0);

        let mut scope = DeclarationScope::new(Arc::new(InterfaceRegistry::new()));
        scope.add_hook(Arc::new(reject));
        scope.add_hook(Arc::new(after));

        let err = scope.declare(&con_foo(vec![])).unwrap_err();
        assert_eq!(err.missing(), ["bar".to_string()]);
        assert!(scope.get("ConFoo").is_none());
        assert!(scope.is_empty());
    }

    #[test]
    fn test_declare_named_resolves_registered_bases() {
        let scope = DeclarationScope::strict(ValidatorConfig::default());
        scope.declare_interface(foo_interface_type()).unwrap();

        let err = scope
            .declare_named("ConFooFailMissing", &["object", "Foo"], [])
            .unwrap_err();
        assert_eq!(err.missing(), ["bar".to_string(), "baz".to_string()]);
        assert!(!scope.contains("ConFooFailMissing"));

        let declared = scope
            .declare_named(
                "ConFooPass",
                &["Foo", "Foo"],
                [
                    Member::parse("bar", "(self)").unwrap(),
                    Member::parse("baz", "(self, a)").unwrap(),
                ],
            )
            .unwrap();
        assert_eq!(declared.interfaces.len(), 1);
        assert!(declared.member("baz").is_some());
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_plain_bases_skip_validation() {
        let scope = DeclarationScope::strict(ValidatorConfig::default());
        scope.declare_interface(foo_interface_type()).unwrap();

        let declared = scope
            .declare_named("Plain", &["object", "Mixin"], [Member::attribute("bar")])
            .unwrap();
        assert!(declared.interfaces.is_empty());
    }

    #[test]
    fn test_declare_interface_conflict() {
        let scope = DeclarationScope::strict(ValidatorConfig::default());
        scope.declare_interface(foo_interface_type()).unwrap();

        let other = InterfaceType::builder("Foo").build();
        assert!(scope.declare_interface(other).is_err());
    }
}
