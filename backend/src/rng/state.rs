//! State transfer - snapshot, restore and jump
//!
//! A [`GeneratorState`] is an owned copy of the twister array and cursor.
//! Restoring it reproduces the exact stream the generator would have
//! produced from the point the snapshot was taken.
//!
//! # Persisted form
//!
//! [`GeneratorState::to_json`] wraps the snapshot in a versioned envelope
//! with a SHA-256 checksum. The envelope is private to this crate and only
//! guaranteed to round-trip through [`GeneratorState::from_json`].

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::twister::{StableRandom, STATE_SIZE};
use crate::error::RandomError;

const BLOB_VERSION: u32 = 1;

/// Snapshot of a generator's twister array and cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorState {
    /// Twister array, always 624 words when taken from a generator
    pub words: Vec<u32>,

    /// Words consumed since the last regeneration (0..=624)
    pub cursor: usize,
}

/// On-disk envelope for a snapshot
#[derive(Serialize, Deserialize)]
struct StateBlob {
    version: u32,
    state: GeneratorState,
    checksum: String,
}

impl GeneratorState {
    /// Check that this snapshot has the shape of a live generator
    ///
    /// # Errors
    /// `InvalidState` if the array is not 624 words or the cursor is past 624
    pub fn validate(&self) -> Result<(), RandomError> {
        if self.words.len() != STATE_SIZE {
            return Err(RandomError::InvalidState(format!(
                "expected {} words, got {}",
                STATE_SIZE,
                self.words.len()
            )));
        }
        if self.cursor > STATE_SIZE {
            return Err(RandomError::InvalidState(format!(
                "cursor {} exceeds {}",
                self.cursor, STATE_SIZE
            )));
        }
        Ok(())
    }

    /// SHA-256 of the words and cursor, as lowercase hex
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.words {
            hasher.update(word.to_le_bytes());
        }
        hasher.update((self.cursor as u64).to_le_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Serialize to the crate's opaque JSON form
    pub fn to_json(&self) -> Result<String, RandomError> {
        let blob = StateBlob {
            version: BLOB_VERSION,
            state: self.clone(),
            checksum: self.checksum(),
        };
        Ok(serde_json::to_string(&blob)?)
    }

    /// Parse a snapshot produced by [`GeneratorState::to_json`]
    ///
    /// # Errors
    /// - `Serialization` if the JSON does not parse
    /// - `InvalidState` on an unknown version, a checksum mismatch, or a
    ///   snapshot of the wrong shape
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        let blob: StateBlob = serde_json::from_str(json)?;

        if blob.version != BLOB_VERSION {
            return Err(RandomError::InvalidState(format!(
                "unsupported state version {}",
                blob.version
            )));
        }
        if blob.state.checksum() != blob.checksum {
            return Err(RandomError::InvalidState(
                "checksum mismatch".to_string(),
            ));
        }
        blob.state.validate()?;

        Ok(blob.state)
    }
}

impl StableRandom {
    /// Take a snapshot of the twister array and cursor
    ///
    /// The snapshot is an independent copy; changing it never affects
    /// this generator.
    ///
    /// # Example
    /// ```
    /// use stable_random::StableRandom;
    ///
    /// let mut rng = StableRandom::new(42);
    /// rng.next_u32();
    /// let snapshot = rng.get_state();
    /// let expected = rng.next_u32();
    ///
    /// rng.set_state(&snapshot).unwrap();
    /// assert_eq!(rng.next_u32(), expected);
    /// ```
    pub fn get_state(&self) -> GeneratorState {
        GeneratorState {
            words: self.state.to_vec(),
            cursor: self.cursor,
        }
    }

    /// Replace the twister array and cursor with a snapshot
    ///
    /// The seed reported by [`StableRandom::seed`] is not changed.
    ///
    /// # Errors
    /// `InvalidState` if the snapshot is malformed; the generator is left
    /// untouched.
    pub fn set_state(&mut self, state: &GeneratorState) -> Result<(), RandomError> {
        state.validate()?;
        self.state.copy_from_slice(&state.words);
        self.cursor = state.cursor;
        debug!(cursor = self.cursor, "restored generator state");
        Ok(())
    }

    /// Move the generator roughly `n` draws forward
    ///
    /// Advances the cursor by `n` and then performs one draw, discarding it.
    /// If the cursor passes the end of the array the next regeneration starts
    /// from the beginning of the new array, so this is a coarse skip and not
    /// the exact state after `n` further draws.
    pub fn jump(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
        self.next_u32();
        debug!(distance = n, cursor = self.cursor, "jumped generator");
    }
}
