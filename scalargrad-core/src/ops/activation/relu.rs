use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- Backward Operation ---

/// Local slope: 1 for a strictly positive input, 0 otherwise (including
/// exactly zero), NaN for a NaN input.
#[derive(Debug)]
struct ReluBackward {
    slope: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.slope * grad_output]
    }
}

// --- Forward Operation ---

/// Rectified Linear Unit: `max(0, x)`.
///
/// A NaN input yields a NaN output and a NaN gradient instead of being
/// clamped to zero.
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let (data, slope) = if x.is_nan() {
        (x, f64::NAN)
    } else if x > 0.0 {
        (x, 1.0)
    } else {
        (0.0, 0.0)
    };
    Value::from_data(ValueData::from_op(
        data,
        "relu",
        vec![input.clone()],
        Rc::new(ReluBackward { slope }),
    ))
}

impl Value {
    /// Applies ReLU. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
