use crate::error::ScalarGradError;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Draws `n` samples uniformly from `[low, high)`.
///
/// # Errors
/// `InvalidHyperparameter` if a bound is not finite or `low >= high`.
pub fn uniform<R: Rng + ?Sized>(
    n: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<f64>, ScalarGradError> {
    for (name, bound) in [("low", low), ("high", high)] {
        if !bound.is_finite() {
            return Err(ScalarGradError::InvalidHyperparameter {
                name: name.to_string(),
                value: bound,
            });
        }
    }
    if low >= high {
        return Err(ScalarGradError::InvalidHyperparameter {
            name: "low".to_string(),
            value: low,
        });
    }
    Ok(sample(&Uniform::new(low, high), n, rng))
}

/// Default weight initialization: `n` samples from `[-1, 1)`.
pub(crate) fn symmetric_unit<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    sample(&Uniform::new(-1.0, 1.0), n, rng)
}

fn sample<R: Rng + ?Sized>(dist: &Uniform<f64>, n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| dist.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_range_and_len() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = uniform(1000, -0.5, 2.0, &mut rng)?;
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|&x| (-0.5..2.0).contains(&x)));
        Ok(())
    }

    #[test]
    fn test_uniform_is_reproducible() -> Result<(), ScalarGradError> {
        let a = uniform(8, -1.0, 1.0, &mut StdRng::seed_from_u64(42))?;
        let b = uniform(8, -1.0, 1.0, &mut StdRng::seed_from_u64(42))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_uniform_rejects_invalid_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            uniform(3, 1.0, 1.0, &mut rng),
            Err(ScalarGradError::InvalidHyperparameter { ref name, .. }) if name == "low"
        ));
        assert!(matches!(
            uniform(3, 2.0, -2.0, &mut rng),
            Err(ScalarGradError::InvalidHyperparameter { .. })
        ));
        assert!(matches!(
            uniform(3, 0.0, f64::INFINITY, &mut rng),
            Err(ScalarGradError::InvalidHyperparameter { ref name, .. }) if name == "high"
        ));
        assert!(matches!(
            uniform(3, f64::NAN, 1.0, &mut rng),
            Err(ScalarGradError::InvalidHyperparameter { ref name, .. }) if name == "low"
        ));
    }

    #[test]
    fn test_symmetric_unit_range() {
        let samples = symmetric_unit(500, &mut StdRng::seed_from_u64(3));
        assert_eq!(samples.len(), 500);
        assert!(samples.iter().all(|&x| (-1.0..1.0).contains(&x)));
    }
}
