// src/autograd/mod.rs

//! Reverse-mode differentiation: the backward-rule trait, graph traversal and
//! gradient utilities.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;

use crate::value::Value;

/// Resets the gradient of every listed node to `0.0`.
///
/// Must be called between independent backward passes over shared nodes,
/// otherwise gradients accumulate.
pub fn zero_grad(values: &[Value]) {
    for value in values {
        value.zero_grad();
    }
}
