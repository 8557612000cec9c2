use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let sq = pow_op(&a, 2.0)?;
    assert_eq!(sq.data(), 9.0);
    assert_eq!(sq.op_label(), "pow");
    assert_eq!(sq.inputs().len(), 1);

    let root = pow_op(&Value::new(2.0), 0.5)?;
    assert_relative_eq!(root.data(), std::f64::consts::SQRT_2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), ScalarGradError> {
    let a = Value::new(2.0);
    let g = pow_op(&a, 2.0)?;
    g.backward()?;
    // 2 * 2^1
    assert_eq!(a.grad(), 4.0);

    let b = Value::new(3.0);
    let cube = b.pow(3.0)?;
    cube.backward()?;
    assert_relative_eq!(b.grad(), 27.0);
    Ok(())
}

#[test]
fn test_pow_negative_base_integral_exponent() -> Result<(), ScalarGradError> {
    let a = Value::new(-2.0);
    let cube = pow_op(&a, 3.0)?;
    assert_eq!(cube.data(), -8.0);
    cube.backward()?;
    assert_relative_eq!(a.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_zero_base() -> Result<(), ScalarGradError> {
    let zero = Value::new(0.0);
    let err = pow_op(&zero, 0.5).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::DomainError {
            operation: "pow".to_string(),
            base: 0.0,
            exponent: 0.5,
        }
    );
    assert!(pow_op(&zero, -1.0).is_err());
    assert!(pow_op(&zero, 0.0).is_err());

    // Exponents >= 1 have a finite derivative at zero.
    let sq = pow_op(&zero, 2.0)?;
    sq.backward()?;
    assert_eq!(zero.grad(), 0.0);
    let id = pow_op(&Value::new(0.0), 1.0)?;
    assert_eq!(id.data(), 0.0);
    Ok(())
}

#[test]
fn test_pow_negative_base_fractional_exponent() {
    let a = Value::new(-4.0);
    assert!(matches!(
        pow_op(&a, 0.5),
        Err(ScalarGradError::DomainError { .. })
    ));
}

#[test]
fn test_pow_non_finite_exponent() {
    let a = Value::new(2.0);
    assert!(pow_op(&a, f64::NAN).is_err());
    assert!(pow_op(&a, f64::INFINITY).is_err());
}

#[test]
fn test_pow_grad_check() {
    let result = check_grad(
        |inputs| inputs[0].pow(2.5),
        &[1.7],
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "grad check failed: {:?}", result);
}
