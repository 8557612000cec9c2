use crate::autograd::zero_grad;
use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum and weight decay:
///
/// ```text
/// d_p = grad + weight_decay * p
/// buf = momentum * buf + d_p        (if momentum != 0)
/// p   = p - lr * buf
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One buffer per parameter, same order as `params`.
    momentum_buffers: Vec<f64>,
}

fn check_hyperparameter(name: &str, value: f64, allow_zero: bool) -> Result<(), ScalarGradError> {
    let valid = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    if valid {
        Ok(())
    } else {
        Err(ScalarGradError::InvalidHyperparameter {
            name: name.to_string(),
            value,
        })
    }
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The leaves to optimize, typically `module.parameters()`.
    /// * `lr`: The learning rate. Must be finite and strictly positive.
    /// * `momentum`: Momentum factor, `0.0` disables it.
    /// * `weight_decay`: L2 penalty factor, `0.0` disables it.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
    ) -> Result<Self, ScalarGradError> {
        check_hyperparameter("lr", lr, false)?;
        check_hyperparameter("momentum", momentum, true)?;
        check_hyperparameter("weight_decay", weight_decay, true)?;

        let params: Vec<Value> = params.into_iter().collect();
        if params.is_empty() {
            log::warn!("SgdOptimizer created with an empty parameter list.");
        }
        let momentum_buffers = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers,
        })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate for subsequent steps.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        check_hyperparameter("lr", lr, false)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        log::debug!(
            "SGD step over {} parameters (lr={}, momentum={}, weight_decay={})",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );
        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            let p = param.data();
            let mut d_p = param.grad();
            if !d_p.is_finite() {
                log::warn!("Non-finite gradient {} on parameter {:?}", d_p, param);
            }

            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * p;
            }

            if self.momentum != 0.0 {
                *buffer = self.momentum * *buffer + d_p;
                d_p = *buffer;
            }

            param.update_data(p - self.lr * d_p)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        zero_grad(&self.params);
    }
}
