use std::fmt::Debug;

/// Defines the interface for the backward rule of a differentiable operation.
///
/// Every operation that creates a non-leaf `Value` stores an implementation of
/// this trait in the output node's `grad_fn`, next to the operand handles in
/// the node's `inputs`. The rule only captures the scalars its local
/// derivative needs (operand values, the exponent), never a handle to the
/// output node, so moving or cloning handles cannot invalidate it and no
/// reference cycle is formed.
pub trait BackwardOp: Debug {
    /// Computes the contribution to each input's gradient, given the gradient
    /// flowing into the output of this operation (`grad_output`, dL/dOut).
    ///
    /// For `out = f(x_1, .., x_n)` this returns `dL/dOut * dOut/dx_i` for each
    /// input. The order **must** strictly match the order of the node's
    /// recorded inputs. The engine does the accumulation, so an operand used
    /// twice (as in `a * a`) simply appears twice and receives both
    /// contributions.
    fn backward(&self, grad_output: f64) -> Vec<f64>;
}
