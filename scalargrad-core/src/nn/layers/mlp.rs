use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: a stack of layers where every layer except the
/// last applies ReLU.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
    n_inputs: usize,
}

impl Mlp {
    /// Creates a network taking `n_inputs` values, with one layer per entry of
    /// `layer_sizes` (the last entry is the output width).
    pub fn new(n_inputs: usize, layer_sizes: &[usize]) -> Self {
        Self::with_rng(n_inputs, layer_sizes, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(n_inputs: usize, layer_sizes: &[usize], rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let nonlinear = i + 1 != layer_sizes.len();
            layers.push(Layer::with_rng(fan_in, size, nonlinear, &mut *rng));
            fan_in = size;
        }
        log::debug!(
            "Built MLP with {} inputs and layer sizes {:?}",
            n_inputs,
            layer_sizes
        );
        Mlp { layers, n_inputs }
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
            });
        }
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(Layer::to_string).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
