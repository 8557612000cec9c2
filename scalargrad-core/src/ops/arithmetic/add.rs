// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward operation for addition: d(a + b)/da = d(a + b)/db = 1.
#[derive(Debug)]
struct AddBackward;

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }
}

// --- Forward Operation ---

/// Adds two values, recording both as inputs of the result.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_data(ValueData::from_op(
        data,
        "+",
        vec![a.clone(), b.clone()],
        Rc::new(AddBackward),
    ))
}

impl Value {
    /// `self + other`. See [`add_op`].
    pub fn add(&self, other: &Value) -> Value {
        add_op(self, other)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
