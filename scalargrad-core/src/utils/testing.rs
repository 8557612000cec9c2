use crate::value::Value;

/// Checks that the gradients of `values` match `expected` within `tolerance`.
/// Panics with the offending index otherwise.
pub fn check_grads_near(values: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(
        values.len(),
        expected.len(),
        "Gradient count mismatch"
    );

    for (i, (value, e)) in values.iter().zip(expected.iter()).enumerate() {
        let actual = value.grad();
        let diff = (actual - *e).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}

/// Helper to create one leaf per entry of `data`.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}
