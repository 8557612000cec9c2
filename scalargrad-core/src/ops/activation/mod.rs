// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activations used by the network layer.
//!
//! ## Currently Implemented:
//! - [`relu_op`](relu::relu_op): Rectified Linear Unit.

pub mod relu;

// Re-export key functions
pub use relu::relu_op;
