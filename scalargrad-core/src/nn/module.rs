use crate::autograd::zero_grad;
use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A capability interface: anything that can run a forward pass over scalar
/// values and list its trainable leaves. Composition is static, so no
/// container type or downcasting is involved.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building new graph nodes on top of `inputs`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs` does not have the expected length.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to all trainable leaves (weights and biases).
    ///
    /// The handles share the module's nodes: their gradients are the ones the
    /// backward pass fills in.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.2.w1"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to `0.0`.
    fn zero_grad(&self) {
        zero_grad(&self.parameters());
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
