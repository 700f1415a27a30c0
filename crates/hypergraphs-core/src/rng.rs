//! Uniform random source and edge activation
//!
//! The engine never looks up a global generator: callers seed one
//! [`EngineRng`] at process start and pass it by `&mut` into every growth
//! call, so a run is reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::types::Concentration;

/// Generator used by the CLI
pub type EngineRng = ChaCha8Rng;

/// Source of uniform values in [0, 1)
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl UniformSource for ChaCha8Rng {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl UniformSource for rand::rngs::StdRng {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Seed the engine generator, from OS entropy when no seed is given
pub fn engine_rng(seed: Option<u64>) -> EngineRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draw a seed from OS entropy, so an unseeded run can still be replayed
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Replays a fixed cycle of values; for deterministic tests of the engine
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, next: 0 }
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

/// Decides, one draw per examination, whether a candidate edge is open
pub struct EdgeOracle<'r, S: ?Sized> {
    source: &'r mut S,
    p: f64,
    draws: u64,
}

impl<'r, S: UniformSource + ?Sized> EdgeOracle<'r, S> {
    pub fn new(source: &'r mut S, concentration: Concentration) -> Self {
        Self {
            source,
            p: concentration.value(),
            draws: 0,
        }
    }

    /// Draw once and report whether the edge is open (`u < p`)
    pub fn is_open(&mut self) -> bool {
        self.draws += 1;
        self.source.next_uniform() < self.p
    }

    /// Number of edge examinations so far
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
