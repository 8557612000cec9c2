use crate::error::ScalarGradError;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitMark {
    /// On the current DFS path. Meeting it again means a cycle.
    InProgress,
    Done,
}

/// One DFS stack frame: the node and the next recorded input to explore.
struct Frame {
    node: Value,
    inputs: Vec<Value>,
    next: usize,
}

/// The subgraph reachable backward from a root, in topological order.
///
/// Holding the nodes keeps every `NodeId` used during the pass valid.
#[derive(Debug)]
pub(crate) struct ComputationGraph {
    root: Value,
    /// Post-order: every node appears after all of its inputs.
    sorted: Vec<Value>,
}

impl ComputationGraph {
    /// Sorts the graph reachable from `root`.
    ///
    /// # Errors
    /// `GraphIntegrityError` if a node is reached again while still on the
    /// traversal path.
    pub(crate) fn build(root: &Value) -> Result<Self, ScalarGradError> {
        let sorted = topological_sort(root)?;
        Ok(ComputationGraph {
            root: root.clone(),
            sorted,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Nodes in reverse-topological order: the root first, leaves last.
    pub(crate) fn reverse_order(&self) -> impl Iterator<Item = &Value> {
        self.sorted.iter().rev()
    }

    /// Seeds the root with `1.0` and applies every backward rule once, root
    /// first.
    ///
    /// Upstream gradients of this pass are summed per node in `pass_grads`
    /// before the node's own rule runs. Stored gradients are only written once
    /// every rule has run: the root is seeded with `1.0` and every other node
    /// receives `+=` its pass total, so repeated passes accumulate correctly on
    /// intermediate nodes as well as on leaves. On error no gradient changes.
    pub(crate) fn backward(&self) -> Result<(), ScalarGradError> {
        log::debug!("Backward pass over {} nodes", self.len());

        let root_id = self.root.node_id();
        let mut pass_grads: HashMap<NodeId, f64> = HashMap::with_capacity(self.len());
        pass_grads.insert(root_id, 1.0);

        for node in self.reverse_order() {
            let upstream = pass_grads.get(&node.node_id()).copied().unwrap_or(0.0);

            let (grad_fn, inputs) = {
                let guard = node.read_data();
                (guard.grad_fn.clone(), guard.inputs.clone())
            };

            let Some(op) = grad_fn else {
                continue;
            };
            log::trace!("Applying {:?} with upstream gradient {}", op, upstream);

            let input_grads = op.backward(upstream);
            if input_grads.len() != inputs.len() {
                return Err(ScalarGradError::GraphIntegrityError {
                    operation: "backward".to_string(),
                    reason: format!(
                        "backward rule returned {} gradients, but has {} inputs (for op: {:?})",
                        input_grads.len(),
                        inputs.len(),
                        op
                    ),
                });
            }

            for (input, grad) in inputs.iter().zip(input_grads) {
                *pass_grads.entry(input.node_id()).or_insert(0.0) += grad;
            }
        }

        for node in &self.sorted {
            let node_id = node.node_id();
            let mut guard = node.write_data();
            if node_id == root_id {
                guard.grad = 1.0;
            } else {
                guard.grad += pass_grads.get(&node_id).copied().unwrap_or(0.0);
            }
        }

        Ok(())
    }
}

/// Builds a topological sort of the graph reachable from `root`.
///
/// Iterative depth-first post-order over the recorded inputs, keyed by node
/// identity. Every node appears exactly once, after all of its inputs.
pub(crate) fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarGradError> {
    let mut marks: HashMap<NodeId, VisitMark> = HashMap::new();
    let mut sorted: Vec<Value> = Vec::new();

    marks.insert(root.node_id(), VisitMark::InProgress);
    let mut stack = vec![Frame {
        node: root.clone(),
        inputs: root.raw_inputs(),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if let Some(input) = frame.inputs.get(frame.next).cloned() {
            frame.next += 1;
            let input_id = input.node_id();
            match marks.get(&input_id) {
                Some(VisitMark::Done) => {}
                Some(VisitMark::InProgress) => {
                    return Err(ScalarGradError::GraphIntegrityError {
                        operation: "topological_sort".to_string(),
                        reason: format!(
                            "cycle detected: node {:?} (op `{}`) reached again while still being visited",
                            input_id,
                            input.op_label()
                        ),
                    });
                }
                None => {
                    marks.insert(input_id, VisitMark::InProgress);
                    let inputs = input.raw_inputs();
                    stack.push(Frame {
                        node: input,
                        inputs,
                        next: 0,
                    });
                }
            }
        } else if let Some(finished) = stack.pop() {
            marks.insert(finished.node.node_id(), VisitMark::Done);
            sorted.push(finished.node);
        }
    }

    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
