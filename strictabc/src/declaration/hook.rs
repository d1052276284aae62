//! Declaration hook trait and implementations.

use tracing::{debug, trace, warn};

use crate::config::ValidatorConfig;
use crate::errors::StrictInterfaceError;
use crate::observability::{DeclarationSpanAttributes, SpanTimer};
use crate::validator::{validate, SpecializationCandidate};

/// Runs once for every type being declared, before the type exists.
///
/// Returning an error rejects the declaration: no type is produced.
#[cfg_attr(test, mockall::automock)]
pub trait DeclarationHook: Send + Sync {
    /// Inspects the candidate and accepts or rejects it.
    fn on_declare(&self, candidate: &SpecializationCandidate) -> Result<(), StrictInterfaceError>;
}

/// A hook that accepts every declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDeclarationHook;

impl DeclarationHook for NoOpDeclarationHook {
    fn on_declare(&self, _candidate: &SpecializationCandidate) -> Result<(), StrictInterfaceError> {
        Ok(())
    }
}

/// The strict interface validator as a declaration hook.
#[derive(Debug, Clone, Default)]
pub struct StrictDeclarationHook {
    config: ValidatorConfig,
}

impl StrictDeclarationHook {
    /// Creates a hook with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Describes a declaration pass without running it.
    #[must_use]
    pub fn span_attributes(&self, candidate: &SpecializationCandidate) -> DeclarationSpanAttributes {
        DeclarationSpanAttributes::new(candidate.name())
            .with_interfaces(candidate.unique_bases().iter().map(|base| base.name()))
            .with_convention_rule(self.config.convention_rule.to_string())
    }
}

impl DeclarationHook for StrictDeclarationHook {
    fn on_declare(&self, candidate: &SpecializationCandidate) -> Result<(), StrictInterfaceError> {
        if !candidate.has_interface_bases() {
            trace!(type_name = candidate.name(), "No interface bases, skipping validation");
            return Ok(());
        }

        let timer = SpanTimer::start("strictabc.declare");
        let attrs = self.span_attributes(candidate);

        match validate(candidate, self.config.convention_rule) {
            Ok(()) => {
                if self.config.log_accepted {
                    let attrs = attrs
                        .with_outcome("accepted")
                        .with_duration_ms(timer.finish());
                    debug!(
                        type_name = candidate.name(),
                        attributes = ?attrs.to_otel_attributes(),
                        "Declaration accepted"
                    );
                }
                Ok(())
            }
            Err(err) => {
                let attrs = attrs
                    .with_outcome("rejected")
                    .with_violations(err.missing().len(), err.mismatched().len())
                    .with_duration_ms(timer.finish());
                warn!(
                    type_name = candidate.name(),
                    missing = attrs.missing,
                    mismatched = attrs.mismatched,
                    code = %err.error_info().code,
                    attributes = ?attrs.to_otel_attributes(),
                    "Declaration rejected"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::con_foo;
    use crate::validator::Member;

    #[test]
    fn test_noop_hook_accepts_anything() {
        let candidate = con_foo(vec![]);
        assert!(NoOpDeclarationHook.on_declare(&candidate).is_ok());
    }

    #[test]
    fn test_strict_hook_accepts_conforming_type() {
        let hook = StrictDeclarationHook::default();
        let candidate = con_foo(vec![
            Member::parse("bar", "(self)").unwrap(),
            Member::parse("baz", "(self, a)").unwrap(),
        ]);
        assert!(hook.on_declare(&candidate).is_ok());
    }

    #[test]
    fn test_strict_hook_rejects_with_every_violation() {
        let hook = StrictDeclarationHook::default();
        let candidate = con_foo(vec![Member::parse("bar", "(cls)").unwrap()]);

        let err = hook.on_declare(&candidate).unwrap_err();
        assert_eq!(err.missing(), ["baz".to_string()]);
        assert_eq!(err.mismatched().len(), 1);
    }

    #[test]
    fn test_strict_hook_skips_types_without_interfaces() {
        let hook = StrictDeclarationHook::default();
        let candidate = SpecializationCandidate::new("Plain").with_member(Member::attribute("bar"));
        assert!(hook.on_declare(&candidate).is_ok());
    }

    #[test]
    fn test_exact_config_is_honoured() {
        let candidate = con_foo(vec![
            Member::parse_classmethod("bar", "(self)").unwrap(),
            Member::parse("baz", "(self, a)").unwrap(),
        ]);

        assert!(StrictDeclarationHook::default().on_declare(&candidate).is_ok());

        let strict = StrictDeclarationHook::new(ValidatorConfig::new().exact());
        let err = strict.on_declare(&candidate).unwrap_err();
        assert_eq!(err.mismatched()[0].operation, "bar");
    }

    #[test]
    fn test_span_attributes() {
        let hook = StrictDeclarationHook::default();
        let candidate = con_foo(vec![]);
        let otel = hook.span_attributes(&candidate).to_otel_attributes();

        assert_eq!(otel.get("declaration.type_name"), Some(&"ConFoo".to_string()));
        assert_eq!(otel.get("declaration.interfaces"), Some(&"Foo".to_string()));
        assert_eq!(
            otel.get("declaration.convention_rule"),
            Some(&"unwrap".to_string())
        );
    }
}
