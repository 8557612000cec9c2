// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Division, defined as `a * b^(-1)`: reuses the mul and pow rules.
///
/// # Errors
/// `DomainError` when `b` is zero.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    let divisor = b.data();
    if divisor == 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "div".to_string(),
            base: divisor,
            exponent: -1.0,
        });
    }
    let reciprocal = pow_op(b, -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

impl Value {
    /// `self / other`. See [`div_op`].
    pub fn div(&self, other: &Value) -> Result<Value, ScalarGradError> {
        div_op(self, other)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
