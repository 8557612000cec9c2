// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

/// Backward operation for multiplication (product rule).
/// Stores the operand values: da = b * dOut, db = a * dOut.
#[derive(Debug)]
struct MulBackward {
    a_data: f64,
    b_data: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.b_data * grad_output, self.a_data * grad_output]
    }
}

/// Multiplies two values, recording both as inputs of the result.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let a_data = a.data();
    let b_data = b.data();
    Value::from_data(ValueData::from_op(
        a_data * b_data,
        "*",
        vec![a.clone(), b.clone()],
        Rc::new(MulBackward { a_data, b_data }),
    ))
}

impl Value {
    /// `self * other`. See [`mul_op`].
    pub fn mul(&self, other: &Value) -> Value {
        mul_op(self, other)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
