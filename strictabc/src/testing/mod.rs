//! Testing utilities for strict interfaces.
//!
//! This module provides:
//! - The canonical `Foo` interface and candidate builders
//! - Assertions over validation outcomes

mod assertions;
mod fixtures;

pub use assertions::{
    assert_accepted, assert_attribute_mismatch, assert_missing, assert_mismatch_for,
    assert_rejected,
};
pub use fixtures::{candidate, con_foo, foo_interface, foo_interface_type, interface};
