use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single unit computing `relu?(b + Σ w_i * x_i)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with weights drawn uniformly from `[-1, 1)` and a zero
    /// bias, using the thread-local RNG.
    pub fn new(n_inputs: usize, nonlinear: bool) -> Self {
        Self::with_rng(n_inputs, nonlinear, &mut rand::thread_rng())
    }

    /// Like [`Neuron::new`] with a caller-provided RNG.
    pub fn with_rng<R: Rng + ?Sized>(n_inputs: usize, nonlinear: bool, rng: &mut R) -> Self {
        let weights = init::symmetric_unit(n_inputs, rng)
            .into_iter()
            .map(Value::new)
            .collect();
        Neuron {
            weights,
            bias: Value::new(0.0),
            nonlinear,
        }
    }

    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64, nonlinear: bool) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Value::new).collect(),
            bias: Value::new(bias),
            nonlinear,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Forward pass producing the neuron's single output.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(if self.nonlinear { act.relu() } else { act })
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.call(inputs)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<Value> {
        self.weights
            .iter()
            .cloned()
            .chain(std::iter::once(self.bias.clone()))
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .chain(std::iter::once(("b".to_string(), self.bias.clone())))
            .collect()
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlinear { "ReLU" } else { "Linear" };
        write!(f, "{}Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
