//! Members declared in a specializing type's own namespace.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::contracts::{CallingConvention, Signature};
use crate::errors::StrictabcError;

/// What a declared member looks like to the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "signature", rename_all = "snake_case")]
pub enum MemberShape {
    /// A callable, with its underlying function's signature.
    Callable(Signature),
    /// A non-callable attribute such as a constant.
    Attribute,
}

impl MemberShape {
    /// The signature of a callable member.
    #[must_use]
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Self::Callable(signature) => Some(signature),
            Self::Attribute => None,
        }
    }
}

impl fmt::Display for MemberShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(signature) => write!(f, "{signature}"),
            Self::Attribute => write!(f, "<non-callable attribute>"),
        }
    }
}

/// A member of the type being declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member name.
    pub name: String,
    /// Callable signature or attribute.
    pub shape: MemberShape,
}

impl Member {
    /// Creates a callable member.
    #[must_use]
    pub fn callable(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            shape: MemberShape::Callable(signature),
        }
    }

    /// Creates a non-callable attribute member.
    #[must_use]
    pub fn attribute(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: MemberShape::Attribute,
        }
    }

    /// Creates a plain function member from a source-like parameter list.
    pub fn parse(name: impl Into<String>, params: &str) -> Result<Self, StrictabcError> {
        Ok(Self::callable(name, Signature::parse(params)?))
    }

    /// Creates a classmethod member; `params` are the underlying function's.
    pub fn parse_classmethod(
        name: impl Into<String>,
        params: &str,
    ) -> Result<Self, StrictabcError> {
        Ok(Self::callable(name, Signature::parse(params)?.classmethod()))
    }

    /// Creates a staticmethod member; `params` are the underlying function's.
    pub fn parse_staticmethod(
        name: impl Into<String>,
        params: &str,
    ) -> Result<Self, StrictabcError> {
        Ok(Self::callable(name, Signature::parse(params)?.staticmethod()))
    }

    /// Calling convention of a callable member.
    #[must_use]
    pub fn convention(&self) -> Option<CallingConvention> {
        self.shape.signature().map(|s| s.convention)
    }
}
