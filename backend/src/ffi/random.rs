//! PyO3 wrapper for StableRandom
//!
//! Exposes the generator to Python with the method names of the original
//! pure-Python class. Streams match that class for every method except
//! `seed`, which rebuilds the state array here (see `PyStableRandom::seed`).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::core::clock::SystemClock;
use crate::core::config::SeedConfig;
use crate::error::RandomError;
use crate::rng::{GeneratorState, StableRandom as RustStableRandom};
use crate::sequence;

fn to_py_err(err: RandomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from stable_random import StableRandom
///
/// rand = StableRandom(0)
/// rand.random()        # 0.5488135024320365
/// rand.randint(1, 10)  # 6
///
/// lst = [1, 2, 3, 4, 5]
/// rand.shuffle(lst)    # [1, 3, 2, 5, 4]
/// ```
#[pyclass(name = "StableRandom")]
pub struct PyStableRandom {
    inner: RustStableRandom,
}

#[pymethods]
impl PyStableRandom {
    /// Create a generator; `None` seeds from the system clock
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u32>) -> Self {
        let inner = RustStableRandom::from_config(&SeedConfig::from(seed), &SystemClock);
        PyStableRandom { inner }
    }

    /// Re-seed; `None` seeds from the system clock
    ///
    /// Rebuilds the state array, so the stream restarts as if freshly
    /// constructed. The pure-Python class only recorded the new seed here and
    /// kept drawing from its existing array.
    #[pyo3(signature = (seed=None))]
    fn seed(&mut self, seed: Option<u32>) {
        match seed {
            Some(seed) => self.inner.reseed(seed),
            None => self.inner.reseed_from_clock(&SystemClock),
        }
    }

    /// Uniform float in [0, 1]
    fn random(&mut self) -> f64 {
        self.inner.uniform01()
    }

    /// Integer in [a, b]
    fn randint(&mut self, a: i64, b: i64) -> PyResult<i64> {
        self.inner.randint(a, b).map_err(to_py_err)
    }

    /// Integer from range(start, stop, step)
    #[pyo3(signature = (start, stop, step=1))]
    fn randrange(&mut self, start: i64, stop: i64, step: i64) -> PyResult<i64> {
        self.inner.randrange(start, stop, step).map_err(to_py_err)
    }

    /// Float between a and b
    fn uniform(&mut self, a: f64, b: f64) -> f64 {
        self.inner.uniform(a, b)
    }

    /// Standard normal sample (two draws)
    fn gauss_next(&mut self) -> f64 {
        self.inner.gaussian()
    }

    /// Opaque snapshot string for `setstate`
    fn getstate(&self) -> PyResult<String> {
        self.inner.get_state().to_json().map_err(to_py_err)
    }

    /// Restore a snapshot produced by `getstate`
    fn setstate(&mut self, state: &str) -> PyResult<()> {
        let state = GeneratorState::from_json(state).map_err(to_py_err)?;
        self.inner.set_state(&state).map_err(to_py_err)
    }

    /// Coarse forward skip, see `StableRandom::jump`
    fn jumpahead(&mut self, n: usize) {
        self.inner.jump(n)
    }

    /// Shuffle a list in place
    fn shuffle(&mut self, items: &Bound<'_, PyList>) -> PyResult<()> {
        let mut values: Vec<Bound<'_, PyAny>> = items.iter().collect();
        sequence::shuffle(&mut self.inner, &mut values).map_err(to_py_err)?;
        for (i, value) in values.into_iter().enumerate() {
            items.set_item(i, value)?;
        }
        Ok(())
    }

    /// Pick one element of a list
    fn choice<'py>(&mut self, items: &Bound<'py, PyList>) -> PyResult<Bound<'py, PyAny>> {
        let values: Vec<Bound<'py, PyAny>> = items.iter().collect();
        sequence::choice(&mut self.inner, &values)
            .cloned()
            .map_err(to_py_err)
    }
}
