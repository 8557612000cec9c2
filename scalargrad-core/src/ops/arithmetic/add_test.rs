use super::*;
use crate::error::ScalarGradError;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.5);
    let c = add_op(&a, &b);
    assert_relative_eq!(c.data(), -1.5);
    assert_eq!(c.op_label(), "+");
    assert_eq!(c.grad(), 0.0);
    assert!(!c.is_leaf());
    assert_eq!(c.inputs(), vec![a.clone(), b.clone()]);
    // Operands untouched.
    assert_eq!(a.data(), 2.0);
    assert_eq!(b.data(), -3.5);
}

#[test]
fn test_add_backward_simple() -> Result<(), ScalarGradError> {
    for (x, y) in [(2.0, 3.0), (-7.25, 0.0), (1e6, -1e-6)] {
        let a = Value::new(x);
        let b = Value::new(y);
        let c = add_op(&a, &b);
        c.backward()?;
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
        assert_eq!(c.grad(), 1.0);
    }
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarGradError> {
    let a = Value::new(4.0);
    let y = add_op(&a, &a);
    assert_eq!(y.data(), 8.0);
    assert_eq!(y.inputs().len(), 1, "a + a has a single distinct input");
    y.backward()?;
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_operator_and_method_agree() -> Result<(), ScalarGradError> {
    let a = Value::new(1.5);
    let b = Value::new(2.5);
    let via_op = &a + &b;
    let via_method = a.add(&b);
    let via_scalar = &a + 2.5;
    assert_eq!(via_op.data(), via_method.data());
    assert_eq!(via_op.data(), via_scalar.data());
    assert!(!via_op.ptr_eq(&via_method), "each call builds a new node");
    Ok(())
}
