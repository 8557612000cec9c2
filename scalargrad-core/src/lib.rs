//! Scalar reverse-mode automatic differentiation.
//!
//! Every [`Value`] is a node in a computation graph built on the fly by
//! arithmetic operations. Calling [`Value::backward`] on a result fills in
//! `d result / d node` for every node that contributed to it. The [`nn`]
//! module builds neurons, layers and multi-layer perceptrons on top of the
//! engine, and [`optim`] updates their parameters.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub(crate) mod value_data;

pub use autograd::zero_grad;
pub use error::ScalarGradError;
pub use ops::{add_op, div_op, mul_op, neg_op, pow_op, relu_op, sub_op};
pub use value::Value;
