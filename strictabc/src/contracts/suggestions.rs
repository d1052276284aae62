//! Contract suggestion registry mapping error codes to remediation hints.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::errors::codes;

/// Structured remediation info for a contract violation.
#[derive(Debug, Clone)]
pub struct ContractSuggestion {
    /// Error code this suggestion applies to.
    pub code: String,
    /// Short title for the error.
    pub title: String,
    /// Detailed summary of the issue.
    pub summary: String,
    /// Steps to fix the issue.
    pub fix_steps: Vec<String>,
    /// Optional documentation URL.
    pub doc_url: Option<String>,
}

impl ContractSuggestion {
    /// Creates a new contract suggestion.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        fix_steps: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            summary: summary.into(),
            fix_steps,
            doc_url: None,
        }
    }

    /// Adds a documentation URL.
    #[must_use]
    pub fn with_doc_url(mut self, url: impl Into<String>) -> Self {
        self.doc_url = Some(url.into());
        self
    }
}

static SUGGESTIONS: LazyLock<RwLock<HashMap<String, ContractSuggestion>>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(
        codes::MISSING.to_string(),
        ContractSuggestion::new(
            codes::MISSING,
            "Missing Required Operation",
            "A type declares a strict interface as a base but does not define one of its required operations.",
            vec![
                "Review the missing names listed in the error".to_string(),
                "Define each one directly on the specializing type".to_string(),
                "Inherited definitions from other bases do not count".to_string(),
            ],
        ),
    );

    map.insert(
        codes::SIGNATURE.to_string(),
        ContractSuggestion::new(
            codes::SIGNATURE,
            "Signature Mismatch",
            "A required operation is defined, but its parameter list differs from the interface declaration.",
            vec![
                "Compare the required and actual signatures in the error".to_string(),
                "Match parameter names, order, kinds and default presence exactly".to_string(),
                "The first parameter is compared by name too: (self) is not (cls)".to_string(),
            ],
        ),
    );

    map.insert(
        codes::ATTRIBUTE.to_string(),
        ContractSuggestion::new(
            codes::ATTRIBUTE,
            "Required Operation Shadowed",
            "A required operation name is bound to a non-callable attribute.",
            vec![
                "Rename the attribute".to_string(),
                "Define the required operation as a method".to_string(),
            ],
        ),
    );

    map.insert(
        codes::REGISTRY.to_string(),
        ContractSuggestion::new(
            codes::REGISTRY,
            "Interface Registry Conflict",
            "Two different interfaces were declared under the same qualified name, or a base name was not registered.",
            vec![
                "Give each interface a unique qualified name".to_string(),
                "Register interfaces before declaring their specializations".to_string(),
            ],
        ),
    );

    RwLock::new(map)
});

/// Register a suggestion for a contract code.
pub fn register_suggestion(suggestion: ContractSuggestion) {
    SUGGESTIONS.write().insert(suggestion.code.clone(), suggestion);
}

/// Return suggestion metadata for an error code if registered.
#[must_use]
pub fn get_contract_suggestion(code: &str) -> Option<ContractSuggestion> {
    SUGGESTIONS.read().get(code).cloned()
}

/// Returns all registered suggestions.
#[must_use]
pub fn list_suggestions() -> Vec<ContractSuggestion> {
    SUGGESTIONS.read().values().cloned().collect()
}
