//! Binomial coefficients and the sample generator.
//!
//! Coefficients are evaluated with the multiplicative formula
//!
//! ```text
//! C(n, k) = Π_{i=1..k} (n - k + i) / i,    k = min(k, n - k)
//! ```
//!
//! multiplying before dividing, so every partial product is the integer
//! `C(n - k + i, i)` and stays exact while it fits in the `f64` mantissa.
//! No factorial is ever formed.

use crate::types::{Sample, SampleError, SampleSet};

/// Largest order whose coefficients are all finite in `f64`.
///
/// `C(1029, 514) ≈ 1.43e308` is the last central coefficient below
/// `f64::MAX`.
pub const MAX_ORDER: u32 = 1029;

/// Binomial coefficient `C(n, k)` as `f64`.
///
/// Returns `0.0` for `k > n`. Exact for every result below `2^53`;
/// beyond that the relative error stays within a few ulps until the value
/// overflows to infinity.
///
/// # Example
///
/// ```
/// use binom_core::math::combinatorics::binomial;
///
/// assert_eq!(binomial(6, 3), 20.0);
/// assert_eq!(binomial(6, 7), 0.0);
/// assert_eq!(binomial(52, 5), 2_598_960.0);
/// ```
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);

    let mut acc = 1.0_f64;
    for i in 1..=k {
        let num = (n - k + i) as f64;
        let den = i as f64;
        let scaled = acc * num;
        acc = if scaled.is_finite() {
            scaled / den
        } else {
            acc / den * num
        };
    }
    acc
}

/// Generate the samples `(i, C(n, i))` for `i = 0..=n`.
///
/// # Errors
///
/// * `SampleError::NegativeOrder` - `n < 0`
/// * `SampleError::Overflow` - `n > MAX_ORDER`
///
/// # Example
///
/// ```
/// use binom_core::math::combinatorics::binomial_samples;
///
/// let set = binomial_samples(6).unwrap();
/// assert_eq!(set.ys(), vec![1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0]);
///
/// assert!(binomial_samples(-1).is_err());
/// ```
pub fn binomial_samples(n: i64) -> Result<SampleSet, SampleError> {
    if n < 0 {
        return Err(SampleError::NegativeOrder { n });
    }
    let order = match u32::try_from(n) {
        Ok(order) if order <= MAX_ORDER => order,
        _ => {
            return Err(SampleError::Overflow {
                n,
                max: MAX_ORDER,
            })
        }
    };

    let samples = (0..=order)
        .map(|i| Sample::new(i, binomial(u64::from(order), u64::from(i))))
        .collect();

    Ok(SampleSet::new(order, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // binomial
    // ========================================

    #[test]
    fn test_binomial_edges() {
        assert_eq!(binomial(0, 0), 1.0);
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 5), 1.0);
        assert_eq!(binomial(5, 6), 0.0);
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(5, 2), 10.0);
        assert_eq!(binomial(8, 3), 56.0);
        assert_eq!(binomial(30, 15), 155_117_520.0);
    }

    #[test]
    fn test_binomial_large_order_is_accurate() {
        // C(60, 30) = 118264581564861424, above 2^53
        assert_relative_eq!(
            binomial(60, 30),
            118_264_581_564_861_424.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_binomial_near_overflow() {
        let central = binomial(u64::from(MAX_ORDER), u64::from(MAX_ORDER / 2));
        assert!(central.is_finite());
        assert!(central > 1e308);
        assert!(binomial(1030, 515).is_infinite());
    }

    // ========================================
    // binomial_samples
    // ========================================

    #[test]
    fn test_samples_order_six() {
        let set = binomial_samples(6).unwrap();
        let expected = [
            (0, 1.0),
            (1, 6.0),
            (2, 15.0),
            (3, 20.0),
            (4, 15.0),
            (5, 6.0),
            (6, 1.0),
        ];
        assert_eq!(set.order(), 6);
        assert_eq!(set.len(), expected.len());
        for (sample, (x, y)) in set.samples().iter().zip(expected) {
            assert_eq!(sample.x, x);
            assert_eq!(sample.y, y);
        }
    }

    #[test]
    fn test_samples_order_zero() {
        let set = binomial_samples(0).unwrap();
        assert_eq!(set.samples(), &[Sample::new(0, 1.0)]);
    }

    #[test]
    fn test_samples_negative_order() {
        match binomial_samples(-1).unwrap_err() {
            SampleError::NegativeOrder { n } => assert_eq!(n, -1),
            other => panic!("Expected NegativeOrder error, got {:?}", other),
        }
    }

    #[test]
    fn test_samples_overflowing_order() {
        assert!(binomial_samples(i64::from(MAX_ORDER)).is_ok());
        assert_eq!(
            binomial_samples(1030).unwrap_err(),
            SampleError::Overflow {
                n: 1030,
                max: MAX_ORDER
            }
        );
        assert!(matches!(
            binomial_samples(i64::MAX),
            Err(SampleError::Overflow { .. })
        ));
    }

    #[test]
    fn test_samples_maximal_at_centre() {
        let set = binomial_samples(9).unwrap();
        let centre = set.get(4).unwrap().y;
        assert_eq!(set.max_y(), centre);
        assert_eq!(set.get(5).unwrap().y, centre);
    }
}
