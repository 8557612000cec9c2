// src/value/mod.rs

use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd;
mod traits;

/// Stable identity of a graph node: the address of its shared storage.
///
/// Valid as a map key only while some `Value` keeps the node alive, which the
/// backward pass guarantees by holding every visited node.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally:
/// 1.  **Shared Ownership:** cloning a `Value` clones the handle, not the node.
///     Every operation stores handles to its operands, so an operand lives at
///     least as long as any node derived from it.
/// 2.  **Interior Mutability:** the gradient is accumulated through shared
///     handles during the backward pass.
///
/// Equality and hashing are by node identity, never by `data` or `grad`: two
/// distinct leaves holding `1.0` are different nodes.
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node (a constant, an input or a trainable parameter).
    pub fn new(data: f64) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    pub(crate) fn from_data(value_data: ValueData) -> Self {
        Value {
            node: Rc::new(RefCell::new(value_data)),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the diagnostic tag of the operation that produced this node
    /// (`"+"`, `"*"`, `"pow"`, `"relu"`), or `""` for a leaf.
    pub fn op_label(&self) -> &'static str {
        self.read_data().op
    }

    /// True if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// True if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// The distinct operands this node was derived from, in first-use order.
    /// `a + a` has a single input.
    pub fn inputs(&self) -> Vec<Value> {
        let mut distinct: Vec<Value> = Vec::new();
        for input in self.raw_inputs() {
            if !distinct.iter().any(|seen| seen.ptr_eq(&input)) {
                distinct.push(input);
            }
        }
        distinct
    }

    /// Operands exactly as recorded, duplicates included.
    pub(crate) fn raw_inputs(&self) -> Vec<Value> {
        self.read_data().inputs.clone()
    }
}
