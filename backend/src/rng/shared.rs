//! Lock-guarded generator handle
//!
//! The generator itself needs `&mut self` for every draw. When one stream
//! has to be driven from several execution contexts, [`SharedRandom`] puts
//! it behind a single mutex so that twists are never observed half-done and
//! draws happen in one total order.

use std::sync::Arc;

use parking_lot::Mutex;

use super::state::GeneratorState;
use super::twister::StableRandom;
use crate::error::RandomError;
use crate::sequence::RandomSource;

/// Cloneable handle to one shared generator
///
/// Clones share the same stream.
///
/// # Example
/// ```
/// use stable_random::{SharedRandom, StableRandom};
///
/// let shared = SharedRandom::new(StableRandom::new(0));
/// let other = shared.clone();
///
/// let mut reference = StableRandom::new(0);
/// assert_eq!(shared.next_u32(), reference.next_u32());
/// assert_eq!(other.next_u32(), reference.next_u32());
/// ```
#[derive(Debug, Clone)]
pub struct SharedRandom {
    inner: Arc<Mutex<StableRandom>>,
}

impl SharedRandom {
    pub fn new(rng: StableRandom) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Run `f` with exclusive access to the generator
    ///
    /// Use this to keep a batch of draws contiguous in the stream.
    pub fn with<T>(&self, f: impl FnOnce(&mut StableRandom) -> T) -> T {
        let mut rng = self.inner.lock();
        f(&mut rng)
    }

    pub fn next_u32(&self) -> u32 {
        self.inner.lock().next_u32()
    }

    pub fn uniform01(&self) -> f64 {
        self.inner.lock().uniform01()
    }

    pub fn below(&self, n: i64) -> Result<i64, RandomError> {
        self.inner.lock().below(n)
    }

    pub fn gaussian(&self) -> f64 {
        self.inner.lock().gaussian()
    }

    pub fn get_state(&self) -> GeneratorState {
        self.inner.lock().get_state()
    }

    pub fn set_state(&self, state: &GeneratorState) -> Result<(), RandomError> {
        self.inner.lock().set_state(state)
    }

    pub fn jump(&self, n: usize) {
        self.inner.lock().jump(n)
    }
}

impl RandomSource for SharedRandom {
    fn uniform01(&mut self) -> f64 {
        SharedRandom::uniform01(self)
    }

    fn below(&mut self, n: i64) -> Result<i64, RandomError> {
        SharedRandom::below(self, n)
    }
}

impl From<StableRandom> for SharedRandom {
    fn from(rng: StableRandom) -> Self {
        Self::new(rng)
    }
}
