//! Precondition checks that abort a build script with a readable message.

use crate::error::{Result, SupportError};

/// Build the error a failed precondition reports
pub fn fail(message: impl Into<String>) -> SupportError {
    SupportError::Assertion(message.into())
}

/// Fail with `message` unless `condition` holds
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<()> {
    if condition { Ok(()) } else { Err(fail(message)) }
}

/// Fail with `message` when `condition` holds
pub fn ensure_not(condition: bool, message: impl Into<String>) -> Result<()> {
    ensure(!condition, message)
}

/// Unwrap a value that has to be present
pub fn require<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| fail("Not nil expected"))
}
