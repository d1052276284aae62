//! Operations and their required-operation markers.

use serde::{Deserialize, Serialize};

use super::signature::{CallingConvention, Signature};
use crate::errors::StrictabcError;
use crate::utils::validate_name;

/// Marker attached to an operation an interface requires.
///
/// Captured once when the operation is marked and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OperationMarker {
    /// Operation name.
    pub name: String,
    /// Signature captured at marking time.
    pub signature: Signature,
    /// Always true for markers produced by [`mark_required`].
    pub required: bool,
}

impl OperationMarker {
    fn capture(operation: &Operation) -> Self {
        Self {
            name: operation.name.clone(),
            signature: operation.signature.clone(),
            required: true,
        }
    }
}

/// An operation declared on a type body.
///
/// Serialized as name, signature and a `required` flag. The marker is never
/// read from input: deserializing validates the name and recaptures it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OperationRecord", into = "OperationRecord")]
pub struct Operation {
    name: String,
    signature: Signature,
    marker: Option<OperationMarker>,
}

#[derive(Serialize, Deserialize)]
struct OperationRecord {
    name: String,
    signature: Signature,
    #[serde(default)]
    required: bool,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = StrictabcError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let operation = Self::new(record.name, record.signature)?;
        Ok(if record.required {
            mark_required(operation)
        } else {
            operation
        })
    }
}

impl From<Operation> for OperationRecord {
    fn from(operation: Operation) -> Self {
        Self {
            required: operation.is_required(),
            name: operation.name,
            signature: operation.signature,
        }
    }
}

impl Operation {
    /// Creates an unmarked operation.
    pub fn new(name: impl Into<String>, signature: Signature) -> Result<Self, StrictabcError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            signature,
            marker: None,
        })
    }

    /// Creates an operation from a source-like parameter list.
    pub fn parse(name: impl Into<String>, params: &str) -> Result<Self, StrictabcError> {
        let signature = Signature::parse(params)?;
        Self::new(name, signature)
    }

    /// Creates a classmethod operation from the underlying function's parameters.
    pub fn parse_classmethod(
        name: impl Into<String>,
        params: &str,
    ) -> Result<Self, StrictabcError> {
        let signature = Signature::parse(params)?;
        Self::new(name, signature.classmethod())
    }

    /// Operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared signature.
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Calling convention the operation is bound with.
    #[must_use]
    pub fn convention(&self) -> CallingConvention {
        self.signature.convention
    }

    /// The required-operation marker, if any.
    #[must_use]
    pub fn marker(&self) -> Option<&OperationMarker> {
        self.marker.as_ref()
    }

    /// True if the operation has been marked required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.marker.as_ref().is_some_and(|m| m.required)
    }
}

/// Marks an operation as required and captures its canonical signature.
///
/// Marking is unconditional and idempotent: marking an already-marked
/// operation recaptures the same signature.
#[must_use]
pub fn mark_required(mut operation: Operation) -> Operation {
    let marker = OperationMarker::capture(&operation);
    tracing::trace!(
        operation = %marker.name,
        signature = %marker.signature,
        "Marked operation as required"
    );
    operation.marker = Some(marker);
    operation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_new_unmarked() {
        let op = Operation::parse("bar", "(self)").unwrap();
        assert_eq!(op.name(), "bar");
        assert!(!op.is_required());
        assert!(op.marker().is_none());
    }

    #[test]
    fn test_mark_required_captures_signature() {
        let op = mark_required(Operation::parse("baz", "(self, a)").unwrap());
        let marker = op.marker().unwrap();
        assert!(op.is_required());
        assert!(marker.required);
        assert_eq!(marker.name, "baz");
        assert_eq!(marker.signature, Signature::positional(["self", "a"]));
    }

    #[test]
    fn test_mark_required_is_idempotent() {
        let once = mark_required(Operation::parse("bar", "(self)").unwrap());
        let twice = mark_required(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.marker(), twice.marker());
    }

    #[test]
    fn test_mark_required_keeps_classmethod_convention() {
        let op = mark_required(Operation::parse_classmethod("make", "(cls, a)").unwrap());
        let marker = op.marker().unwrap();
        assert_eq!(marker.signature.convention, CallingConvention::Classmethod);
        assert_eq!(marker.signature.parameter_names(), vec!["cls", "a"]);
    }

    #[test]
    fn test_operation_rejects_invalid_name() {
        let err = Operation::parse("not-a-name", "(self)").unwrap_err();
        assert!(matches!(err, StrictabcError::InvalidName(_)));
    }

    #[test]
    fn test_operation_rejects_bad_signature() {
        let err = Operation::parse("bar", "(self, self)").unwrap_err();
        assert!(matches!(err, StrictabcError::SignatureParse(_)));
    }

    #[test]
    fn test_serialization_round_trip() {
        let op = mark_required(Operation::parse("baz", "(self, a=1)").unwrap());
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["name"], serde_json::json!("baz"));
        assert_eq!(json["required"], serde_json::json!(true));

        let back: Operation = serde_json::from_value(json).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn test_deserialize_validates_name_and_signature() {
        let bad_name = serde_json::json!({
            "name": "not-a-name",
            "signature": {"parameters": [{"name": "self", "kind": "positional_or_keyword"}]},
        });
        assert!(serde_json::from_value::<Operation>(bad_name).is_err());

        let bad_signature = serde_json::json!({
            "name": "bar",
            "signature": {"parameters": [
                {"name": "self", "kind": "positional_or_keyword"},
                {"name": "self", "kind": "positional_or_keyword"}
            ]},
        });
        assert!(serde_json::from_value::<Operation>(bad_signature).is_err());
    }

    #[test]
    fn test_deserialize_recaptures_marker() {
        let json = serde_json::json!({
            "name": "bar",
            "signature": {"parameters": [{"name": "self", "kind": "positional_or_keyword"}]},
            "required": true,
            "marker": {"name": "ghost", "signature": {"parameters": []}, "required": true},
        });
        let op: Operation = serde_json::from_value(json).unwrap();
        let marker = op.marker().unwrap();
        assert_eq!(marker.name, "bar");
        assert_eq!(marker.signature, Signature::positional(["self"]));
    }
}
