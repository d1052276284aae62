//! Specialization validation.
//!
//! This module provides:
//! - The transient candidate describing a type under declaration
//! - The presence-then-signature check over its interface bases
//! - The aggregated violation report

mod candidate;
mod check;
mod member;
mod report;

pub use candidate::SpecializationCandidate;
pub use check::{collect_violations, validate};
pub use member::{Member, MemberShape};
pub use report::{ReportBuilder, SignatureMismatch, ViolationReport};
