// src/value/traits.rs

use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Clones the handle. This is a shallow clone that increases the reference
    /// count of the node; both handles refer to the same node.
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl Debug for Value {
    /// Shows the node's scalars without walking its inputs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(data={}, grad={}, op={:?}, inputs={})",
            guard.data,
            guard.grad,
            guard.op,
            guard.inputs.len()
        )
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}

impl PartialEq for Value {
    /// Node identity. Two nodes holding equal scalars are *not* equal.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

// --- Operators ---
// Only the infallible operations get operators. `pow` and `div` can fail and
// are exposed as methods returning `Result`.

impl<'a> Add<&'a Value> for &'a Value {
    type Output = Value;

    fn add(self, rhs: &'a Value) -> Value {
        add_op(self, rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        add_op(self, &Value::new(rhs))
    }
}

impl<'a> Mul<&'a Value> for &'a Value {
    type Output = Value;

    fn mul(self, rhs: &'a Value) -> Value {
        mul_op(self, rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        mul_op(self, &Value::new(rhs))
    }
}

impl<'a> Sub<&'a Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: &'a Value) -> Value {
        sub_op(self, rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        sub_op(self, &Value::new(rhs))
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl<'a> Sum<&'a Value> for Value {
    /// Left fold with `add_op`, starting from a `0.0` leaf.
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, v))
    }
}

impl Sum<Value> for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, &v))
    }
}
