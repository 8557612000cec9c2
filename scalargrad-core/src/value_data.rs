// src/value_data.rs
use std::fmt::Debug;
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Internal storage for a single node of the computation graph.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle so that
/// many downstream nodes can share (and keep alive) the same operand.
#[derive(Debug)]
pub struct ValueData {
    /// Forward result. Written once at construction.
    pub(crate) data: f64,
    /// Accumulated gradient of the backward root with respect to this node.
    pub(crate) grad: f64,
    /// Operands, in the order the backward rule returns their gradients.
    /// An operand used twice appears twice. Empty for leaves.
    pub(crate) inputs: Vec<Value>,
    /// The backward rule of the operation that produced this node.
    /// Leaf nodes (constants, parameters) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
    /// Diagnostic tag of the producing operation, empty for leaves.
    pub(crate) op: &'static str,
}

impl ValueData {
    /// Creates the storage for a leaf node.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            inputs: Vec::new(),
            grad_fn: None,
            op: "",
        }
    }

    /// Creates the storage for the result of an operation.
    pub(crate) fn from_op(
        data: f64,
        op: &'static str,
        inputs: Vec<Value>,
        grad_fn: Rc<dyn BackwardOp>,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            inputs,
            grad_fn: Some(grad_fn),
            op,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Drop for ValueData {
    /// Releases the inputs iteratively. Dropping the last handle to the tip
    /// of a long chain would otherwise recurse once per node.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.inputs);
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.node) {
                pending.append(&mut cell.into_inner().inputs);
            }
        }
    }
}
