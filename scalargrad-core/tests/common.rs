use scalargrad_core::Value;

// Installs env_logger once per test binary so `RUST_LOG=debug` shows engine logs.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper to create fresh leaves for a test expression.
#[allow(dead_code)]
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}
