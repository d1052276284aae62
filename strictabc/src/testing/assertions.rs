//! Assertions over validation outcomes.

use crate::errors::StrictInterfaceError;
use crate::validator::MemberShape;

/// Asserts that a declaration was accepted.
pub fn assert_accepted(result: &Result<(), StrictInterfaceError>) {
    if let Err(err) = result {
        panic!("Expected declaration to be accepted, got: {err}");
    }
}

/// Asserts that a declaration was rejected and returns the error.
pub fn assert_rejected(result: Result<(), StrictInterfaceError>) -> StrictInterfaceError {
    match result {
        Ok(()) => panic!("Expected declaration to be rejected, but it was accepted"),
        Err(err) => err,
    }
}

/// Asserts the exact missing operations, in order.
pub fn assert_missing(err: &StrictInterfaceError, expected: &[&str]) {
    assert_eq!(
        err.missing(),
        expected,
        "Expected missing {:?}, got {:?}",
        expected,
        err.missing()
    );
}

/// Asserts that `operation` has exactly one signature mismatch.
pub fn assert_mismatch_for(err: &StrictInterfaceError, operation: &str) {
    let count = err.report().mismatches_for(operation).count();
    assert_eq!(
        count,
        1,
        "Expected one mismatch for '{}', got {}. Mismatches: {:?}",
        operation,
        count,
        err.mismatched()
    );
}

/// Asserts that `operation` is shadowed by a non-callable attribute.
pub fn assert_attribute_mismatch(err: &StrictInterfaceError, operation: &str) {
    assert!(
        err.report()
            .mismatches_for(operation)
            .any(|m| m.actual == MemberShape::Attribute),
        "Expected '{}' to be reported as a non-callable attribute",
        operation
    );
}
