//! Assertion primitives used by the package validators.
//!
//! Every failure is a [`ValidationError::Inconsistent`]: these checks are never
//! downgraded by configuration.

use std::fmt::Display;

use super::error::{Result, ValidationError};

pub fn assert_true(message: &str, condition: bool) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::inconsistent(message))
    }
}

pub fn assert_not_null<T>(message: &str, value: &Option<T>) -> Result<()> {
    assert_true(message, value.is_some())
}

/// Checks `min <= value <= max`. NaN is never in range.
pub fn assert_between<T>(message: &str, min: T, max: T, value: T) -> Result<()>
where
    T: PartialOrd + Display + Copy,
{
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::inconsistent(format!(
            "{message} Value {value} is not in range [{min} … {max}]."
        )))
    }
}

/// Checks `|expected - actual| <= tolerance`.
pub fn assert_equals(message: &str, expected: f64, actual: f64, tolerance: f64) -> Result<()> {
    if (expected - actual).abs() <= tolerance {
        Ok(())
    } else {
        Err(ValidationError::inconsistent(format!(
            "{message} Expected {expected} but got {actual}."
        )))
    }
}

/// Elements of an optional collection. A missing collection is empty; a null
/// element fails with `message`.
pub fn non_null_elements<T>(message: &str, collection: Option<Vec<Option<T>>>) -> Result<Vec<T>> {
    collection
        .unwrap_or_default()
        .into_iter()
        .map(|element| element.ok_or_else(|| ValidationError::inconsistent(message)))
        .collect()
}
