//! Sequence utilities: shuffle, choice, sample and weighted choices
//!
//! These functions only see a [`RandomSource`], so every bit of randomness
//! they use comes from the generator behind it. Draw order matches the
//! generic toolkit the generator was originally paired with, so shuffles and
//! samples reproduce across implementations for a fixed seed.
//!
//! # Example
//!
//! ```
//! use stable_random::{sequence, StableRandom};
//!
//! let mut rng = StableRandom::new(0);
//! let mut items = [1, 2, 3, 4, 5];
//! sequence::shuffle(&mut rng, &mut items).unwrap();
//! assert_eq!(items, [1, 2, 4, 5, 3]);
//! ```

use std::collections::HashSet;

use crate::error::RandomError;
use crate::rng::StableRandom;

/// Largest population `sample` handles with the pool method when `k <= 5`
const BASE_POOL_LIMIT: usize = 21;

/// The two primitive draws sequence utilities are built on
pub trait RandomSource {
    /// A uniform float in [0.0, 1.0]
    fn uniform01(&mut self) -> f64;

    /// An integer in [0, n); fails for `n <= 0`
    fn below(&mut self, n: i64) -> Result<i64, RandomError>;
}

impl RandomSource for StableRandom {
    fn uniform01(&mut self) -> f64 {
        StableRandom::uniform01(self)
    }

    fn below(&mut self, n: i64) -> Result<i64, RandomError> {
        StableRandom::below(self, n)
    }
}

/// Index in [0, len) drawn through `below`
fn index_below<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> Result<usize, RandomError> {
    let bound = i64::try_from(len)
        .map_err(|_| RandomError::InvalidArgument(format!("length {} exceeds i64", len)))?;
    Ok(rng.below(bound)? as usize)
}

/// Shuffle a slice in place (Fisher-Yates, walking down from the end)
///
/// Consumes one draw per element after the first.
///
/// # Errors
/// Propagates a failed draw from `rng`; the slice may then be partially
/// shuffled.
pub fn shuffle<R: RandomSource + ?Sized, T>(
    rng: &mut R,
    items: &mut [T],
) -> Result<(), RandomError> {
    for i in (1..items.len()).rev() {
        let j = index_below(rng, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Pick one element uniformly
///
/// # Errors
/// `EmptySequence` if `items` is empty
pub fn choice<'a, R: RandomSource + ?Sized, T>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, RandomError> {
    if items.is_empty() {
        return Err(RandomError::EmptySequence);
    }
    let idx = index_below(rng, items.len())?;
    Ok(&items[idx])
}

/// Pick `k` distinct elements, in selection order
///
/// Small populations use a shrinking pool: each pick draws an index below
/// the remaining pool size and moves the pool's last element into the
/// vacated slot. Populations larger than [`pool_limit`] draw indices below
/// `n` and redraw any index already taken, so draws per pick can vary.
///
/// # Errors
/// `SampleTooLarge` if `k` exceeds the population
pub fn sample<R: RandomSource + ?Sized, T: Clone>(
    rng: &mut R,
    population: &[T],
    k: usize,
) -> Result<Vec<T>, RandomError> {
    let n = population.len();
    if k > n {
        return Err(RandomError::SampleTooLarge {
            requested: k,
            population: n,
        });
    }

    let mut picked = Vec::with_capacity(k);
    if n <= pool_limit(k) {
        let mut pool = population.to_vec();
        for i in 0..k {
            let j = index_below(rng, n - i)?;
            picked.push(pool[j].clone());
            pool[j] = pool[n - i - 1].clone();
        }
    } else {
        let mut taken = HashSet::with_capacity(k);
        for _ in 0..k {
            let mut j = index_below(rng, n)?;
            while !taken.insert(j) {
                j = index_below(rng, n)?;
            }
            picked.push(population[j].clone());
        }
    }
    Ok(picked)
}

/// Largest population `sample` draws from with the pool method
///
/// 21, plus the smallest power of four at least `3 * k` once `k > 5`.
pub fn pool_limit(k: usize) -> usize {
    if k <= 5 {
        return BASE_POOL_LIMIT;
    }
    let target = k.saturating_mul(3);
    let mut power: usize = 1;
    while power < target {
        power = power.saturating_mul(4);
    }
    BASE_POOL_LIMIT.saturating_add(power)
}

/// Pick `k` elements with replacement, weighted by `weights`
///
/// Each pick draws one uniform, scales it by the total weight, and takes the
/// first element whose cumulative weight exceeds it.
///
/// # Errors
/// - `EmptySequence` if `population` is empty
/// - `InvalidArgument` if the weights do not match the population in
///   length, or do not sum to a positive finite total
pub fn choices<'a, R: RandomSource + ?Sized, T>(
    rng: &mut R,
    population: &'a [T],
    weights: &[f64],
    k: usize,
) -> Result<Vec<&'a T>, RandomError> {
    if population.is_empty() {
        return Err(RandomError::EmptySequence);
    }
    if weights.len() != population.len() {
        return Err(RandomError::InvalidArgument(format!(
            "{} weights for a population of {}",
            weights.len(),
            population.len()
        )));
    }

    let cumulative: Vec<f64> = weights
        .iter()
        .scan(0.0, |total, w| {
            *total += w;
            Some(*total)
        })
        .collect();
    let total = cumulative[cumulative.len() - 1];
    if !(total.is_finite() && total > 0.0) {
        return Err(RandomError::InvalidArgument(format!(
            "total of weights must be positive and finite, got {}",
            total
        )));
    }

    let last = population.len() - 1;
    let picks = (0..k)
        .map(|_| {
            let target = rng.uniform01() * total;
            let idx = cumulative[..last].partition_point(|&c| c <= target);
            &population[idx]
        })
        .collect();
    Ok(picks)
}
