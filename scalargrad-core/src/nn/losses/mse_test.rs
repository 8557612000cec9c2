use super::*;
use crate::utils::testing::leaves;
use approx::assert_relative_eq;

#[test]
fn test_mse_mean_forward_and_backward() -> Result<(), ScalarGradError> {
    let preds = leaves(&[1.0, 2.0, 4.0]);
    let targets = leaves(&[1.5, 2.0, 3.0]);
    let loss = MSELoss::default().forward(&preds, &targets)?;
    // (0.25 + 0 + 1) / 3
    assert_relative_eq!(loss.data(), 1.25 / 3.0, epsilon = 1e-12);

    loss.backward()?;
    // d/dp_i = 2 (p_i - t_i) / n
    assert_relative_eq!(preds[0].grad(), -1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), 0.0);
    assert_relative_eq!(preds[2].grad(), 2.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(targets[2].grad(), -2.0 / 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_sum() -> Result<(), ScalarGradError> {
    let preds = leaves(&[0.0, 3.0]);
    let targets = leaves(&[1.0, 1.0]);
    let loss = MSELoss::new(Reduction::Sum).forward(&preds, &targets)?;
    assert_relative_eq!(loss.data(), 5.0);
    loss.backward()?;
    assert_relative_eq!(preds[0].grad(), -2.0);
    assert_relative_eq!(preds[1].grad(), 4.0);
    Ok(())
}

#[test]
fn test_mse_errors() {
    let loss = MSELoss::default();
    assert_eq!(
        loss.forward(&[], &[]).unwrap_err(),
        ScalarGradError::EmptyValueList
    );
    assert!(matches!(
        loss.forward(&leaves(&[1.0, 2.0]), &leaves(&[1.0])),
        Err(ScalarGradError::DimensionMismatch { expected: 2, actual: 1 })
    ));
}

#[test]
fn test_reduction_from_str() {
    assert_eq!(Reduction::from_str("MEAN"), Ok(Reduction::Mean));
    assert_eq!(Reduction::from_str("sum"), Ok(Reduction::Sum));
    assert!(matches!(
        Reduction::from_str("none"),
        Err(ScalarGradError::UnsupportedOperation(_))
    ));
}
