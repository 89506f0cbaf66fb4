//! Binomial samples.

use super::SampleError;

/// A single point `(x, C(n, x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Lower index of the coefficient
    pub x: u32,
    /// Coefficient value `C(n, x)`
    pub y: f64,
}

impl Sample {
    /// Create a sample.
    #[inline]
    pub fn new(x: u32, y: f64) -> Self {
        Self { x, y }
    }
}

/// The ordered samples `(i, C(n, i))` for `i = 0..=n`.
///
/// Built by [`binomial_samples`](crate::math::combinatorics::binomial_samples),
/// which guarantees:
/// - exactly `n + 1` samples
/// - `x` strictly increasing from `0` to `n`
/// - `y >= 0` and `y[i] == y[n - i]`
///
/// # Example
///
/// ```
/// use binom_core::math::combinatorics::binomial_samples;
///
/// let set = binomial_samples(4).unwrap();
/// assert_eq!(set.len(), 5);
/// assert_eq!(set.ys(), vec![1.0, 4.0, 6.0, 4.0, 1.0]);
/// assert_eq!(set.get(2).map(|s| s.y), Some(6.0));
/// ```
///
/// Deserialisation goes through [`TryFrom<Vec<Sample>>`], which re-checks
/// these invariants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Sample>", into = "Vec<Sample>")
)]
pub struct SampleSet {
    order: u32,
    samples: Vec<Sample>,
}

impl SampleSet {
    pub(crate) fn new(order: u32, samples: Vec<Sample>) -> Self {
        debug_assert_eq!(samples.len(), order as usize + 1);
        Self { order, samples }
    }

    /// Upper index `n` the samples were drawn from.
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Samples in increasing `x` order.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Abscissae as `f64`, ready for interpolation.
    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| f64::from(s.x)).collect()
    }

    /// Ordinates in `x` order.
    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// Sample at lower index `x`, if `x <= n`.
    #[inline]
    pub fn get(&self, x: u32) -> Option<&Sample> {
        self.samples.get(x as usize)
    }

    /// Largest coefficient value (the central one).
    pub fn max_y(&self) -> f64 {
        self.samples.iter().map(|s| s.y).fold(0.0, f64::max)
    }

    /// Number of samples (`n + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a set built from a valid order.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl TryFrom<Vec<Sample>> for SampleSet {
    type Error = SampleError;

    fn try_from(samples: Vec<Sample>) -> Result<Self, Self::Error> {
        let last = samples
            .len()
            .checked_sub(1)
            .ok_or_else(|| SampleError::InvalidSamples("no samples".to_string()))?;
        let order = u32::try_from(last).map_err(|_| {
            SampleError::InvalidSamples(format!("{} samples exceed u32 order", samples.len()))
        })?;

        for (i, s) in samples.iter().enumerate() {
            if s.x as usize != i {
                return Err(SampleError::InvalidSamples(format!(
                    "sample {} has x = {}, expected {}",
                    i, s.x, i
                )));
            }
            if !s.y.is_finite() || s.y < 0.0 {
                return Err(SampleError::InvalidSamples(format!(
                    "sample {} has invalid value {}",
                    i, s.y
                )));
            }
        }
        if let Some(i) = (0..samples.len()).find(|&i| samples[i].y != samples[last - i].y) {
            return Err(SampleError::InvalidSamples(format!(
                "values at x = {} and x = {} differ",
                i,
                last - i
            )));
        }

        Ok(Self::new(order, samples))
    }
}

impl From<SampleSet> for Vec<Sample> {
    fn from(set: SampleSet) -> Self {
        set.samples
    }
}
