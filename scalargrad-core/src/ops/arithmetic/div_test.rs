use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() -> Result<(), ScalarGradError> {
    let a = Value::new(10.0);
    let b = Value::new(4.0);
    let c = div_op(&a, &b)?;
    assert_relative_eq!(c.data(), 2.5);
    assert_eq!(c.op_label(), "*");
    Ok(())
}

#[test]
fn test_div_backward() -> Result<(), ScalarGradError> {
    let a = Value::new(10.0);
    let b = Value::new(4.0);
    let c = a.div(&b)?;
    c.backward()?;
    // dc/da = 1/b, dc/db = -a/b^2
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -0.625);
    Ok(())
}

#[test]
fn test_div_by_zero() {
    let a = Value::new(1.0);
    let zero = Value::new(0.0);
    let result = div_op(&a, &zero);
    assert!(matches!(
        result,
        Err(ScalarGradError::DomainError { ref operation, .. }) if operation == "div"
    ));
}

#[test]
fn test_div_negative_divisor() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let b = Value::new(-2.0);
    let c = div_op(&a, &b)?;
    assert_relative_eq!(c.data(), -1.5);
    Ok(())
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(
        |inputs| div_op(&inputs[0], &inputs[1]),
        &[0.9, -2.3],
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "grad check failed: {:?}", result);
}
