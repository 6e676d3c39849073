//! Shared primitive types used across the entire simulation.

/// A simulation turn. Turn 0 holds the initial conditions.
pub type Turn = usize;

/// Master seed for a run's random streams.
pub type Seed = u64;
