// src/value/autograd.rs

use crate::{
    autograd::graph::ComputationGraph,
    error::ScalarGradError,
    value::Value,
};

impl Value {
    /// Computes the gradient of this value with respect to every node that
    /// contributed to it.
    ///
    /// The root's gradient is seeded with `1.0`. Gradients of all other nodes
    /// are *accumulated* (`+=`), never reset: calling `backward` twice without
    /// `zero_grad` in between adds the second pass on top of the first, which
    /// is how gradients of several losses are summed into shared parameters.
    ///
    /// # Errors
    /// Returns `GraphIntegrityError` if the graph reachable from this node is
    /// not acyclic. No gradient is modified in that case.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if self.is_leaf() {
            log::debug!("backward() called on a leaf value. Only its own gradient is seeded.");
        }
        let graph = ComputationGraph::build(self)?;
        graph.backward()
    }

    /// Resets the gradient of this node to `0.0`.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Overwrites the forward value of a **leaf** node, e.g. an optimizer
    /// step on a parameter.
    ///
    /// Nodes already derived from this leaf keep their old forward values;
    /// rebuild the forward pass after updating.
    ///
    /// # Errors
    /// Returns `InplaceModificationError` if this node was produced by an
    /// operation, since its value is defined by its inputs.
    pub fn update_data(&self, data: f64) -> Result<(), ScalarGradError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(ScalarGradError::InplaceModificationError {
                operation: "update_data".to_string(),
                reason: format!("cannot overwrite the result of operation `{}`", guard.op),
            });
        }
        guard.data = data;
        Ok(())
    }
}
