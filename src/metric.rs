//! Solution quality metric.

use crate::error::{KnapsackError, Result};

/// Signed relative deviation `(achieved - reference) / reference`.
///
/// Negative when `achieved` falls short of the reference, zero when they
/// match. A positive result against a true optimum means the reference is
/// wrong or a solver overstated its value.
///
/// # Errors
///
/// [`KnapsackError::ZeroReference`] when `reference` is zero.
///
/// # Examples
///
/// ```
/// use u_knapsack::metric::relative_error;
///
/// assert_eq!(relative_error(90, 100).unwrap(), -0.1);
/// assert_eq!(relative_error(100, 100).unwrap(), 0.0);
/// assert!(relative_error(5, 0).is_err());
/// ```
pub fn relative_error(achieved: u64, reference: u64) -> Result<f64> {
    if reference == 0 {
        return Err(KnapsackError::ZeroReference);
    }
    let delta = achieved as f64 - reference as f64;
    Ok(delta / reference as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_is_zero() {
        for x in [1, 7, 1_000_000] {
            assert_eq!(relative_error(x, x).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_shortfall_is_negative() {
        let err = relative_error(7, 9).unwrap();
        assert!(err < 0.0);
        assert!((err + 2.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_excess_is_positive() {
        assert!((relative_error(11, 10).unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_reference() {
        assert!(matches!(
            relative_error(0, 0),
            Err(KnapsackError::ZeroReference)
        ));
    }
}
