// src/nn/mod.rs

//! Neural network building blocks on top of the scalar engine: neurons,
//! layers, multi-layer perceptrons and loss functions.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
