// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtraction, defined as `a + (b * -1)`: reuses the add and mul rules.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl Value {
    /// `self - other`. See [`sub_op`].
    pub fn sub(&self, other: &Value) -> Value {
        sub_op(self, other)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
