//! Samplers derived from the raw 32-bit stream
//!
//! Each sampler consumes a fixed number of raw draws so that streams stay
//! aligned with other implementations of the same generator:
//!
//! - `uniform01`, `below`, `uniform`, `randrange`, `randint`: one draw
//! - `gaussian`, `normal`: two draws

use std::f64::consts::PI;

use super::twister::StableRandom;
use crate::error::RandomError;

/// Divisor mapping a raw draw onto [0, 1]
const UNIFORM_DIVISOR: f64 = u32::MAX as f64;

/// Added to the first uniform of a Gaussian draw so its logarithm is finite
const GAUSS_EPSILON: f64 = 1e-10;

impl StableRandom {
    /// Generate a uniform f64 in [0.0, 1.0]
    ///
    /// The raw draw is divided by `0xFFFF_FFFF`, not `2^32`, so an all-ones
    /// draw yields exactly 1.0. Existing output streams depend on this.
    pub fn uniform01(&mut self) -> f64 {
        self.next_u32() as f64 / UNIFORM_DIVISOR
    }

    /// Generate an integer in [0, n)
    ///
    /// Computed as `floor(uniform01() * n)`. This is slightly biased for
    /// bounds that are not powers of two; the bias is kept for stream
    /// compatibility. The one draw where `uniform01()` is exactly 1.0 maps
    /// to `n - 1`.
    ///
    /// # Errors
    /// `InvalidArgument` if `n <= 0`. No state is consumed in that case.
    ///
    /// # Example
    /// ```
    /// use stable_random::StableRandom;
    ///
    /// let mut rng = StableRandom::new(0);
    /// rng.uniform01();
    /// assert_eq!(rng.below(10), Ok(5));
    /// assert!(rng.below(0).is_err());
    /// ```
    pub fn below(&mut self, n: i64) -> Result<i64, RandomError> {
        if n <= 0 {
            return Err(RandomError::InvalidArgument(format!(
                "upper bound must be positive, got {}",
                n
            )));
        }
        let value = (self.uniform01() * n as f64).floor() as i64;
        Ok(value.min(n - 1))
    }

    /// Generate a standard normal sample
    ///
    /// Uses the cosine half of the Box-Muller transform; each call draws two
    /// fresh uniforms and the sine half is discarded.
    pub fn gaussian(&mut self) -> f64 {
        let x1 = self.uniform01();
        let x2 = self.uniform01();
        // x1 == 1.0 would make the radicand a tiny negative number.
        let radius = (-2.0 * (x1 + GAUSS_EPSILON).ln()).max(0.0).sqrt();
        radius * (2.0 * PI * x2).cos()
    }

    /// Generate a normal sample with the given mean and standard deviation
    pub fn normal(&mut self, mu: f64, sigma: f64) -> f64 {
        mu + sigma * self.gaussian()
    }

    /// Generate a float between `a` and `b`
    ///
    /// Either endpoint may be returned; `a > b` is allowed and mirrors the
    /// interval.
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.uniform01()
    }

    /// Pick an integer from `range(start, stop, step)`
    ///
    /// # Errors
    /// `InvalidArgument` if `step` is zero, the range is empty, or its width
    /// does not fit in an i64.
    ///
    /// # Example
    /// ```
    /// use stable_random::StableRandom;
    ///
    /// let mut rng = StableRandom::new(7);
    /// let value = rng.randrange(10, 50, 5).unwrap();
    /// assert_eq!(value % 5, 0);
    /// assert!((10..50).contains(&value));
    /// ```
    pub fn randrange(&mut self, start: i64, stop: i64, step: i64) -> Result<i64, RandomError> {
        let width = stop
            .checked_sub(start)
            .ok_or_else(|| RandomError::InvalidArgument("range width overflows i64".to_string()))?;

        if step == 1 {
            if width <= 0 {
                return Err(empty_range(start, stop, step));
            }
            return Ok(start + self.below(width)?);
        }

        let count = match step {
            0 => {
                return Err(RandomError::InvalidArgument(
                    "zero step for randrange()".to_string(),
                ))
            }
            s if s > 0 => floor_div(width.saturating_add(s - 1), s),
            s => floor_div(width.saturating_add(s + 1), s),
        };
        if count <= 0 {
            return Err(empty_range(start, stop, step));
        }
        Ok(start + step * self.below(count)?)
    }

    /// Pick an integer in [a, b], both ends included
    ///
    /// # Example
    /// ```
    /// use stable_random::StableRandom;
    ///
    /// let mut rng = StableRandom::new(0);
    /// rng.uniform01();
    /// assert_eq!(rng.randint(1, 10), Ok(6));
    /// ```
    pub fn randint(&mut self, a: i64, b: i64) -> Result<i64, RandomError> {
        let stop = b
            .checked_add(1)
            .ok_or_else(|| RandomError::InvalidArgument("upper bound overflows i64".to_string()))?;
        self.randrange(a, stop, 1)
    }
}

fn empty_range(start: i64, stop: i64, step: i64) -> RandomError {
    RandomError::InvalidArgument(format!(
        "empty range for randrange({}, {}, {})",
        start, stop, step
    ))
}

/// Integer division rounding toward negative infinity
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}
