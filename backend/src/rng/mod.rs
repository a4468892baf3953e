//! Deterministic random number generation
//!
//! Uses the 32-bit Mersenne Twister (MT19937) so output is bit-for-bit
//! identical on every platform for a given seed.
//! CRITICAL: every sampler and sequence utility draws through
//! `StableRandom::next_u32`.

mod sampling;
mod shared;
mod state;
mod twister;

pub use shared::SharedRandom;
pub use state::GeneratorState;
pub use twister::{StableRandom, STATE_SIZE};
