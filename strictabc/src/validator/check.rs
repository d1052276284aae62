//! The presence-then-shape check over a candidate's interface bases.

use super::candidate::SpecializationCandidate;
use super::member::MemberShape;
use super::report::{ReportBuilder, SignatureMismatch, ViolationReport};
use crate::contracts::ConventionRule;
use crate::errors::StrictInterfaceError;

/// Collects every violation of the candidate's interface contracts.
///
/// Bases are visited in declaration order with repeats skipped, then each
/// base's required operations in declaration order. A missing operation is
/// never also reported as a mismatch.
#[must_use]
pub fn collect_violations(
    candidate: &SpecializationCandidate,
    rule: ConventionRule,
) -> Option<ViolationReport> {
    let members = candidate.member_index();
    let mut report = ReportBuilder::new();

    for base in candidate.unique_bases() {
        for marker in base.required_operations() {
            let Some(member) = members.get(marker.name.as_str()) else {
                report.missing(&marker.name);
                continue;
            };

            let satisfied = match &member.shape {
                MemberShape::Callable(actual) => marker.signature.matches(actual, rule),
                MemberShape::Attribute => false,
            };
            if !satisfied {
                report.mismatch(SignatureMismatch {
                    type_qualname: candidate.qualname().to_string(),
                    operation: marker.name.clone(),
                    interface: base.name().to_string(),
                    required: marker.signature.clone(),
                    actual: member.shape.clone(),
                });
            }
        }
    }

    report.finish()
}

/// Validates a candidate, failing with every violation at once.
pub fn validate(
    candidate: &SpecializationCandidate,
    rule: ConventionRule,
) -> Result<(), StrictInterfaceError> {
    match collect_violations(candidate, rule) {
        Some(report) => Err(StrictInterfaceError::new(candidate.name(), report)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{InterfaceType, Operation, Signature};
    use crate::validator::Member;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn iface(name: &str, required: &[(&str, &str)]) -> Arc<InterfaceType> {
        let builder = required.iter().fold(InterfaceType::builder(name), |b, (op, params)| {
            b.required(Operation::parse(*op, params).unwrap())
        });
        Arc::new(builder.build())
    }

    #[test]
    fn test_no_bases_is_accepted() {
        let candidate =
            SpecializationCandidate::new("Plain").with_member(Member::attribute("anything"));
        assert!(validate(&candidate, ConventionRule::Unwrap).is_ok());
    }

    #[test]
    fn test_interface_without_requirements_is_accepted() {
        let candidate = SpecializationCandidate::new("ConEmpty").with_base(iface("Empty", &[]));
        assert!(collect_violations(&candidate, ConventionRule::Exact).is_none());
    }

    #[test]
    fn test_reports_missing_and_mismatched_together() {
        let foo = iface("Foo", &[("bar", "(self)"), ("baz", "(self, a)")]);
        let candidate = SpecializationCandidate::new("ConFoo")
            .with_base(foo)
            .with_member(Member::parse("baz", "(self, b)").unwrap());

        let err = validate(&candidate, ConventionRule::Unwrap).unwrap_err();
        assert_eq!(err.type_name(), "ConFoo");
        assert_eq!(err.missing(), ["bar".to_string()]);
        assert_eq!(err.mismatched().len(), 1);
        assert_eq!(err.mismatched()[0].operation, "baz");
        assert_eq!(
            err.mismatched()[0].actual,
            MemberShape::Callable(Signature::positional(["self", "b"]))
        );
    }

    #[test]
    fn test_attribute_is_a_mismatch() {
        let foo = iface("Foo", &[("bar", "(self)")]);
        let candidate = SpecializationCandidate::new("ConFoo")
            .with_base(foo)
            .with_member(Member::attribute("bar"));

        let report = collect_violations(&candidate, ConventionRule::Unwrap).unwrap();
        assert!(report.missing().is_empty());
        assert!(report.mismatched()[0].is_attribute());
    }

    #[test]
    fn test_mismatch_uses_qualname() {
        let foo = iface("Foo", &[("bar", "(self)")]);
        let candidate = SpecializationCandidate::new("ConFoo")
            .with_qualname("test_fail.<locals>.ConFoo")
            .with_base(foo)
            .with_member(Member::parse("bar", "(cls)").unwrap());

        let err = validate(&candidate, ConventionRule::Unwrap).unwrap_err();
        assert_eq!(err.type_name(), "ConFoo");
        assert_eq!(err.mismatched()[0].type_qualname, "test_fail.<locals>.ConFoo");
    }

    #[test]
    fn test_order_follows_bases_then_requirements() {
        let first = iface("First", &[("zeta", "(self)"), ("alpha", "(self)")]);
        let second = iface("Second", &[("beta", "(self)")]);
        let candidate = SpecializationCandidate::new("Both")
            .with_base(first)
            .with_base(second);

        let report = collect_violations(&candidate, ConventionRule::Unwrap).unwrap();
        assert_eq!(
            report.missing(),
            ["zeta".to_string(), "alpha".to_string(), "beta".to_string()]
        );
    }
}
