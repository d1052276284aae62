//! Structured tracing for declaration validation.
//!
//! Validation passes are described as flat attribute maps so they can be
//! attached to log events or exported as span attributes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Attributes describing one declaration pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationSpanAttributes {
    /// Name of the declared type.
    pub type_name: String,
    /// Names of the interface bases being checked.
    pub interfaces: Vec<String>,
    /// Convention rule in effect.
    pub convention_rule: Option<String>,
    /// Outcome: `accepted`, `rejected` or `skipped`.
    pub outcome: Option<String>,
    /// Number of missing operations.
    pub missing: usize,
    /// Number of signature mismatches.
    pub mismatched: usize,
    /// Duration in milliseconds.
    pub duration_ms: Option<f64>,
}

impl DeclarationSpanAttributes {
    /// Creates attributes for the named type.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    /// Sets the interface names.
    #[must_use]
    pub fn with_interfaces<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the convention rule.
    #[must_use]
    pub fn with_convention_rule(mut self, rule: impl Into<String>) -> Self {
        self.convention_rule = Some(rule.into());
        self
    }

    /// Sets the outcome.
    #[must_use]
    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    /// Sets violation counts.
    #[must_use]
    pub fn with_violations(mut self, missing: usize, mismatched: usize) -> Self {
        self.missing = missing;
        self.mismatched = mismatched;
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Converts to OpenTelemetry-style attributes.
    #[must_use]
    pub fn to_otel_attributes(&self) -> HashMap<String, String> {
        let mut attrs = HashMap::new();

        attrs.insert("declaration.type_name".to_string(), self.type_name.clone());
        if !self.interfaces.is_empty() {
            attrs.insert(
                "declaration.interfaces".to_string(),
                self.interfaces.join(","),
            );
        }
        if let Some(ref v) = self.convention_rule {
            attrs.insert("declaration.convention_rule".to_string(), v.clone());
        }
        if let Some(ref v) = self.outcome {
            attrs.insert("declaration.outcome".to_string(), v.clone());
        }
        attrs.insert("declaration.missing".to_string(), self.missing.to_string());
        attrs.insert(
            "declaration.mismatched".to_string(),
            self.mismatched.to_string(),
        );
        if let Some(v) = self.duration_ms {
            attrs.insert("declaration.duration_ms".to_string(), v.to_string());
        }

        attrs
    }
}

/// Simple span timing helper.
#[derive(Debug)]
pub struct SpanTimer {
    start: Instant,
    name: String,
}

impl SpanTimer {
    /// Starts a new span timer.
    #[must_use]
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Returns the elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Returns the span name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finishes the span and returns the duration.
    #[must_use]
    pub fn finish(self) -> f64 {
        self.elapsed_ms()
    }
}

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_filter` when `RUST_LOG` is unset or invalid.
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
