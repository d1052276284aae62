//! Error types for strictabc.
//!
//! [`StrictInterfaceError`] is the one failure the validator produces. The
//! other types cover the surrounding surface: signature parsing, the
//! interface registry, configuration and attribute records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::contracts::{get_contract_suggestion, SignatureParseError};
use crate::utils::InvalidNameError;
use crate::validator::{SignatureMismatch, ViolationReport};

/// The main error type for strictabc operations.
#[derive(Debug, Error)]
pub enum StrictabcError {
    /// A specialization failed its interface contracts.
    #[error("{0}")]
    StrictInterface(#[from] StrictInterfaceError),

    /// A signature string could not be parsed.
    #[error("{0}")]
    SignatureParse(#[from] SignatureParseError),

    /// An operation or parameter name is invalid.
    #[error("{0}")]
    InvalidName(#[from] InvalidNameError),

    /// An interface registry operation failed.
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// Configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A record was built with invalid keys.
    #[error("{0}")]
    InvalidKey(#[from] InvalidKeyError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised when a specializing type does not satisfy its interfaces.
///
/// Carries every violation found in one pass. Never constructed without at
/// least one missing operation or signature mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", render_violations(.type_name, .report))]
pub struct StrictInterfaceError {
    type_name: String,
    #[serde(flatten)]
    report: ViolationReport,
}

impl StrictInterfaceError {
    /// Creates the error for the type being declared.
    #[must_use]
    pub fn new(type_name: impl Into<String>, report: ViolationReport) -> Self {
        Self {
            type_name: type_name.into(),
            report,
        }
    }

    /// Name of the type whose declaration failed.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Required operations absent from the type.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        self.report.missing()
    }

    /// Operations present with the wrong signature.
    #[must_use]
    pub fn mismatched(&self) -> &[SignatureMismatch] {
        self.report.mismatched()
    }

    /// The full violation report.
    #[must_use]
    pub fn report(&self) -> &ViolationReport {
        &self.report
    }

    /// Consumes the error, returning the report.
    #[must_use]
    pub fn into_report(self) -> ViolationReport {
        self.report
    }

    /// Contract error metadata for the most significant violation class.
    #[must_use]
    pub fn error_info(&self) -> ContractErrorInfo {
        let (code, summary, hint) = if !self.missing().is_empty() {
            (
                codes::MISSING,
                format!(
                    "'{}' does not implement required operations: {}",
                    self.type_name,
                    self.missing().join(", ")
                ),
                "Define every required operation on the specializing type.",
            )
        } else if self.mismatched().iter().all(SignatureMismatch::is_attribute) {
            (
                codes::ATTRIBUTE,
                format!(
                    "'{}' shadows required operations with non-callable attributes",
                    self.type_name
                ),
                "Replace the attribute with a method matching the required signature.",
            )
        } else {
            (
                codes::SIGNATURE,
                format!(
                    "'{}' declares required operations with mismatched signatures: {}",
                    self.type_name,
                    self.mismatched()
                        .iter()
                        .map(|m| m.operation.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                "Copy the parameter list of the interface declaration exactly.",
            )
        };

        ContractErrorInfo::new(code, summary)
            .with_fix_hint(hint)
            .with_registered_suggestion()
            .with_context("type_name", serde_json::json!(self.type_name))
            .with_context("missing", serde_json::json!(self.missing()))
            .with_context(
                "mismatched",
                serde_json::to_value(self.mismatched()).unwrap_or_default(),
            )
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!("StrictInterfaceError"));
        map.insert("type_name".to_string(), serde_json::json!(self.type_name));
        map.insert("missing".to_string(), serde_json::json!(self.missing()));
        map.insert(
            "mismatched".to_string(),
            serde_json::to_value(self.mismatched()).unwrap_or_default(),
        );
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

fn render_violations(type_name: &str, report: &ViolationReport) -> String {
    let mut parts = Vec::with_capacity(2);
    if !report.missing().is_empty() {
        parts.push(format!(
            "missing required operations: {}",
            report.missing().join(", ")
        ));
    }
    if !report.mismatched().is_empty() {
        let rendered: Vec<String> = report.mismatched().iter().map(ToString::to_string).collect();
        parts.push(format!("signature mismatches: {}", rendered.join("; ")));
    }
    format!(
        "Can't declare '{}' with unmet strict interface requirements: {}",
        type_name,
        parts.join("; ")
    )
}

/// Errors raised by the interface registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A different interface is already registered under the name.
    #[error("Interface '{qualname}' already registered with different operations")]
    Conflict {
        /// The conflicting qualified name.
        qualname: String,
    },

    /// No interface is registered under the name.
    #[error("Interface '{qualname}' is not registered")]
    NotRegistered {
        /// The qualified name looked up.
        qualname: String,
    },
}

impl RegistryError {
    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(qualname: impl Into<String>) -> Self {
        Self::Conflict {
            qualname: qualname.into(),
        }
    }

    /// Creates a not-registered error.
    #[must_use]
    pub fn not_registered(qualname: impl Into<String>) -> Self {
        Self::NotRegistered {
            qualname: qualname.into(),
        }
    }

    /// Contract error metadata for this error.
    #[must_use]
    pub fn error_info(&self) -> ContractErrorInfo {
        ContractErrorInfo::new(codes::REGISTRY, self.to_string()).with_registered_suggestion()
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid.
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raised when a record is built with keys that are not valid identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid key detected in dict update. Invalid keys: {}", .keys.join(", "))]
pub struct InvalidKeyError {
    /// Every rejected key, in input order.
    pub keys: Vec<String>,
}

impl InvalidKeyError {
    /// Creates a new invalid key error.
    #[must_use]
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

/// Structured metadata for surfaced contract violations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractErrorInfo {
    /// Stable identifier that maps to a suggestion entry.
    pub code: String,
    /// Human-readable description of the issue.
    pub summary: String,
    /// Optional remediation guidance that can be surfaced to users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_hint: Option<String>,
    /// Optional documentation link for deeper troubleshooting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    /// Arbitrary structured data that helps downstream tooling render rich errors.
    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
}

impl ContractErrorInfo {
    /// Creates a new contract error info.
    #[must_use]
    pub fn new(code: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            summary: summary.into(),
            fix_hint: None,
            doc_url: None,
            context: HashMap::new(),
        }
    }

    /// Adds a fix hint.
    #[must_use]
    pub fn with_fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }

    /// Adds a documentation URL.
    #[must_use]
    pub fn with_doc_url(mut self, url: impl Into<String>) -> Self {
        self.doc_url = Some(url.into());
        self
    }

    /// Fills remediation from the suggestion registered for this code.
    ///
    /// The fix steps replace the fix hint; a registered doc URL replaces the
    /// current one. Without a suggestion the info is returned unchanged.
    #[must_use]
    pub fn with_registered_suggestion(mut self) -> Self {
        let Some(suggestion) = get_contract_suggestion(&self.code) else {
            return self;
        };
        if !suggestion.fix_steps.is_empty() {
            self.fix_hint = Some(suggestion.fix_steps.join("; "));
            self.context.insert(
                "fix_steps".to_string(),
                serde_json::json!(suggestion.fix_steps),
            );
        }
        if suggestion.doc_url.is_some() {
            self.doc_url = suggestion.doc_url;
        }
        self.context
            .insert("title".to_string(), serde_json::json!(suggestion.title));
        self
    }

    /// Adds context data.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }
}

/// Stable contract error codes.
pub mod codes {
    /// Required operation missing.
    pub const MISSING: &str = "STRICT-001-MISSING";
    /// Required operation declared with a different signature.
    pub const SIGNATURE: &str = "STRICT-002-SIGNATURE";
    /// Required operation shadowed by a non-callable attribute.
    pub const ATTRIBUTE: &str = "STRICT-003-ATTRIBUTE";
    /// Interface registry conflict or lookup failure.
    pub const REGISTRY: &str = "STRICT-004-REGISTRY";
}
