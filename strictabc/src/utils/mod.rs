//! Utility functions for name validation.

mod validation;

pub use validation::{
    is_identifier, is_keyword, is_soft_keyword, is_valid_key, validate_name, InvalidNameError,
    KEYWORDS, SOFT_KEYWORDS,
};
