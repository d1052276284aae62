//! Violation reports.

use serde::Serialize;
use std::fmt;

use super::member::MemberShape;
use crate::contracts::Signature;

/// One required operation declared with the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureMismatch {
    /// Qualified name of the type being declared.
    pub type_qualname: String,
    /// Name of the required operation.
    pub operation: String,
    /// Name of the interface requiring it.
    pub interface: String,
    /// Signature the interface captured.
    pub required: Signature,
    /// What the type actually declared.
    pub actual: MemberShape,
}

impl SignatureMismatch {
    /// True if the member is not callable at all.
    #[must_use]
    pub fn is_attribute(&self) -> bool {
        matches!(self.actual, MemberShape::Attribute)
    }
}

impl fmt::Display for SignatureMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}: {} requires {}, got {}",
            self.type_qualname, self.operation, self.interface, self.required, self.actual
        )
    }
}

/// Every violation found while validating one specialization.
///
/// Only obtainable through [`ReportBuilder::finish`], which refuses to build
/// an empty report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    missing: Vec<String>,
    mismatched: Vec<SignatureMismatch>,
}

impl ViolationReport {
    /// Names of required operations absent from the type, first-seen order.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Signature mismatches in discovery order.
    #[must_use]
    pub fn mismatched(&self) -> &[SignatureMismatch] {
        &self.mismatched
    }

    /// True if `name` was reported missing.
    #[must_use]
    pub fn is_missing(&self, name: &str) -> bool {
        self.missing.iter().any(|m| m == name)
    }

    /// Mismatches recorded for an operation.
    pub fn mismatches_for<'a>(
        &'a self,
        operation: &'a str,
    ) -> impl Iterator<Item = &'a SignatureMismatch> + 'a {
        self.mismatched.iter().filter(move |m| m.operation == operation)
    }

    /// Total number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missing.len() + self.mismatched.len()
    }

    /// True if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates violations during a validation pass.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    missing: Vec<String>,
    mismatched: Vec<SignatureMismatch>,
}

impl ReportBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a missing operation. Repeats are ignored.
    pub fn missing(&mut self, name: &str) {
        if !self.missing.iter().any(|m| m == name) {
            self.missing.push(name.to_string());
        }
    }

    /// Records a signature mismatch.
    pub fn mismatch(&mut self, mismatch: SignatureMismatch) {
        self.mismatched.push(mismatch);
    }

    /// Returns the report, or `None` if nothing was recorded.
    #[must_use]
    pub fn finish(self) -> Option<ViolationReport> {
        if self.missing.is_empty() && self.mismatched.is_empty() {
            return None;
        }
        Some(ViolationReport {
            missing: self.missing,
            mismatched: self.mismatched,
        })
    }
}
