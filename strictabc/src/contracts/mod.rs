//! Interface contracts.
//!
//! This module provides:
//! - Canonical call signatures and their parser
//! - Operations and required-operation markers
//! - Interface types and a registry indexing them by qualified name
//! - Remediation suggestions keyed by contract error code

mod interface;
mod operation;
mod registry;
mod signature;
mod suggestions;

pub use interface::{InterfaceBuilder, InterfaceType};
pub use operation::{mark_required, Operation, OperationMarker};
pub use registry::{InterfaceCompatibilityReport, InterfaceRegistry, RegisteredInterface};
pub use signature::{
    CallingConvention, ConventionRule, Parameter, ParameterKind, Signature, SignatureParseError,
};
pub use suggestions::{
    get_contract_suggestion, list_suggestions, register_suggestion, ContractSuggestion,
};
