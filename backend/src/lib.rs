//! Stable Random - platform-stable Mersenne Twister
//!
//! Deterministic pseudo-random numbers whose stream, for a fixed seed, is
//! identical on every platform and toolchain.
//!
//! # Architecture
//!
//! - **rng**: Generator engine, samplers, state transfer, shared handle
//! - **sequence**: Shuffle/choice/sample built on the `RandomSource` trait
//! - **core**: Clocks and seed configuration
//! - **error**: Error type for caller-input failures
//!
//! # Critical Invariants
//!
//! 1. Same seed → same stream, bit for bit
//! 2. All randomness flows through `StableRandom::next_u32`
//! 3. Not suitable for cryptography: outputs reveal the state
//!
//! # Example
//!
//! ```
//! use stable_random::StableRandom;
//!
//! let mut rng = StableRandom::new(0);
//! assert!((rng.uniform01() - 0.5488135024320365).abs() < 1e-12);
//! assert_eq!(rng.randint(1, 10), Ok(6));
//! ```

// Module declarations
pub mod core;
pub mod error;
pub mod rng;
pub mod sequence;

// Re-exports for convenience
pub use self::core::clock::{Clock, FixedClock, SystemClock};
pub use self::core::config::SeedConfig;
pub use error::RandomError;
pub use rng::{GeneratorState, SharedRandom, StableRandom, STATE_SIZE};
pub use sequence::RandomSource;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn stable_random(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyStableRandom>()?;
    Ok(())
}
