// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, sub_op};
use crate::value::Value;

/// Specifies the reduction to apply to the output: 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error between predictions and targets, built from engine
/// operations so it can be differentiated like any other node.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `reduce((p_i - t_i)^2)`.
    ///
    /// Targets are usually constant leaves; gradients also flow into them if
    /// they are part of a larger graph.
    ///
    /// # Errors
    /// * `EmptyValueList` if there are no predictions.
    /// * `DimensionMismatch` if the lengths differ.
    pub fn forward(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyValueList);
        }
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }

        // (p - t) * (p - t) rather than pow(2): a zero residual is not a domain error.
        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| {
                let diff = sub_op(p, t);
                mul_op(&diff, &diff)
            })
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => &total * (1.0 / predictions.len() as f64),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
