//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through a `ShockSource`. The production
//! source is `ShockRng`, derived from a caller-supplied master seed.
//!
//! Each consumer gets its own stream, seeded from
//! (master_seed XOR stream_index * golden ratio). This means:
//!   - Drawing shock cards never perturbs the macro shock sequence.
//!   - Each stream is fully reproducible in isolation.

use crate::{
    error::{SimError, SimResult},
    types::Seed,
};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64Mcg;

/// The capability the recurrence needs from randomness: one
/// normal draw at a time. Test doubles implement this directly.
pub trait ShockSource {
    /// Draw from Normal(mean, std_dev).
    fn next_normal(&mut self, mean: f64, std_dev: f64) -> SimResult<f64>;
}

impl<S: ShockSource + ?Sized> ShockSource for &mut S {
    fn next_normal(&mut self, mean: f64, std_dev: f64) -> SimResult<f64> {
        (**self).next_normal(mean, std_dev)
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries — only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum ShockStream {
    Macro = 0,
    ShockCards = 1,
}

impl ShockStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Macro => "macro",
            Self::ShockCards => "shock_cards",
        }
    }
}

/// A named, seeded PCG stream.
pub struct ShockRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl ShockRng {
    pub fn new(master_seed: Seed, stream: ShockStream) -> Self {
        let derived_seed = master_seed ^ (stream as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: stream.name(),
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// The stream the recurrence engine draws its shocks from.
    pub fn for_macro(master_seed: Seed) -> Self {
        Self::new(master_seed, ShockStream::Macro)
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Roll an index in [0, n). `n` must be > 0.
    pub fn next_index(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }
}

impl ShockSource for ShockRng {
    /// A zero std dev returns the mean without consuming the stream.
    fn next_normal(&mut self, mean: f64, std_dev: f64) -> SimResult<f64> {
        if std_dev == 0.0 {
            return Ok(mean);
        }
        let normal = Normal::new(mean, std_dev).map_err(|e| {
            SimError::invalid("std_dev", format!("{std_dev} rejected by {} stream: {e}", self.name))
        })?;
        Ok(normal.sample(&mut self.inner))
    }
}
