use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `n_outputs` neurons sharing the same inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    pub fn new(n_inputs: usize, n_outputs: usize, nonlinear: bool) -> Self {
        Self::with_rng(n_inputs, n_outputs, nonlinear, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_rng(n_inputs, nonlinear, &mut *rng))
            .collect();
        Layer { neurons, n_inputs }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `DimensionMismatch` if the neurons disagree on their input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let n_inputs = neurons.first().map_or(0, Neuron::n_inputs);
        if let Some(odd) = neurons.iter().find(|n| n.n_inputs() != n_inputs) {
            return Err(ScalarGradError::DimensionMismatch {
                expected: n_inputs,
                actual: odd.n_inputs(),
            });
        }
        Ok(Layer { neurons, n_inputs })
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.call(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(Neuron::to_string).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}
