//! # Strictabc
//!
//! Strict interface contracts checked when a type is declared.
//!
//! An interface marks some of its operations as required, each with a
//! canonical signature. A type that names the interface among its bases
//! must define every required operation itself, with exactly that
//! signature, or its declaration fails with one error listing everything
//! that is wrong.
//!
//! - **Contracts**: signatures, required-operation markers, interfaces and
//!   a registry indexing them
//! - **Validation**: a pure check of a declaration candidate against its
//!   interface bases
//! - **Declaration**: hooks that run the check before a type exists
//! - **Records**: immutable attribute records with identifier keys
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strictabc::prelude::*;
//!
//! let scope = DeclarationScope::strict(ValidatorConfig::default());
//! scope.declare_interface(
//!     InterfaceType::builder("Foo")
//!         .required(Operation::parse("bar", "(self)")?)
//!         .build(),
//! )?;
//!
//! let err = scope
//!     .declare_named("ConFoo", &["Foo"], [Member::parse("bar", "(cls)")?])
//!     .unwrap_err();
//! assert_eq!(err.mismatched().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod contracts;
pub mod declaration;
pub mod errors;
pub mod observability;
pub mod records;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod utils;
pub mod validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ValidatorConfig;
    pub use crate::contracts::{
        mark_required, CallingConvention, ConventionRule, InterfaceRegistry, InterfaceType,
        Operation, OperationMarker, Parameter, ParameterKind, Signature,
    };
    pub use crate::declaration::{
        DeclarationHook, DeclarationScope, DeclaredType, StrictDeclarationHook,
    };
    pub use crate::errors::{
        ContractErrorInfo, InvalidKeyError, RegistryError, StrictInterfaceError, StrictabcError,
    };
    pub use crate::records::AttrRecord;
    pub use crate::validator::{
        validate, Member, MemberShape, SignatureMismatch, SpecializationCandidate,
        ViolationReport,
    };
}
