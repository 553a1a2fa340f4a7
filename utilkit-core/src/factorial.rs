use crate::error::UtilError;

/// Largest `n` whose factorial fits in a `u128`
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Computes `n!`.
///
/// Uses an accumulator loop, so large inputs never grow the call stack.
///
/// # Errors
///
/// - `UtilError::NegativeFactorial` if `n < 0`
/// - `UtilError::FactorialOverflow` if `n > 34`
///
/// # Example
///
/// ```rust
/// use utilkit_core::factorial;
///
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u128, UtilError> {
    if n < 0 {
        return Err(UtilError::NegativeFactorial(n));
    }

    (2..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k).ok_or(UtilError::FactorialOverflow(n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
    }

    #[test]
    fn test_small_values() {
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(10).unwrap(), 3_628_800);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_negative_input_is_rejected() {
        let err = factorial(-1).unwrap_err();
        assert!(matches!(err, UtilError::NegativeFactorial(-1)));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_largest_representable_input() {
        let max = factorial(MAX_FACTORIAL_INPUT).unwrap();
        assert_eq!(max, factorial(33).unwrap() * 34);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            factorial(MAX_FACTORIAL_INPUT + 1),
            Err(UtilError::FactorialOverflow(35))
        ));
        assert!(matches!(factorial(i64::MAX), Err(UtilError::FactorialOverflow(_))));
    }
}
