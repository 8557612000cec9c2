use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negation, defined as `a * -1` so no extra backward rule is needed.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

impl Value {
    /// `-self`. See [`neg_op`].
    pub fn neg(&self) -> Value {
        neg_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScalarGradError;

    #[test]
    fn test_neg_forward_and_backward() -> Result<(), ScalarGradError> {
        let a = Value::new(4.0);
        let b = neg_op(&a);
        assert_eq!(b.data(), -4.0);
        assert_eq!(b.op_label(), "*");
        b.backward()?;
        assert_eq!(a.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_neg_operator() {
        let a = Value::new(-2.5);
        assert_eq!((-&a).data(), 2.5);
        assert_eq!(a.neg().data(), 2.5);
    }
}
