// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- Backward Operation ---

/// d(x^n)/dx = n * x^(n-1)
#[derive(Debug)]
struct PowBackward {
    base: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        let local = self.exponent * self.base.powf(self.exponent - 1.0);
        vec![local * grad_output]
    }
}

/// Checks that `base^exponent` and its derivative are finite real numbers.
fn check_domain(operation: &str, base: f64, exponent: f64) -> Result<(), ScalarGradError> {
    let undefined_at_zero = base == 0.0 && exponent < 1.0;
    let complex = base < 0.0 && exponent.fract() != 0.0;
    if base.is_nan() || !exponent.is_finite() || undefined_at_zero || complex {
        return Err(ScalarGradError::DomainError {
            operation: operation.to_string(),
            base,
            exponent,
        });
    }
    Ok(())
}

// --- Forward Operation ---

/// Raises a value to a constant exponent.
///
/// # Errors
/// `DomainError` when the derivative is not a finite real number:
/// * `base == 0` and `exponent < 1` (infinite or undefined derivative),
/// * `base < 0` and `exponent` is not an integer (complex result),
/// * `exponent` is NaN or infinite, or `base` is NaN.
///
/// No node is created on error.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    let base_data = base.data();
    check_domain("pow", base_data, exponent)?;
    Ok(Value::from_data(ValueData::from_op(
        base_data.powf(exponent),
        "pow",
        vec![base.clone()],
        Rc::new(PowBackward {
            base: base_data,
            exponent,
        }),
    )))
}

impl Value {
    /// `self ^ exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
