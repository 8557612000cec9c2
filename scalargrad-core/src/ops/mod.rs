// src/ops/mod.rs

//! Graph-building operations.
//!
//! Each operation creates a brand-new node whose inputs are the operands and
//! whose `grad_fn` knows the local derivative. Operands are never modified.

pub mod activation;
pub mod arithmetic;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
