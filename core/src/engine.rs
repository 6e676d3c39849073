//! The recurrence engine — owns all state for one simulation run.
//!
//! EXECUTION ORDER per turn (fixed, documented, never reordered):
//!   1. Draw eps_y, then eps_pi, from the shock source.
//!   2. Add any queued external inflation shock to the previous turn's
//!      inflation as the step sees it (the recorded turn is untouched).
//!   3. Apply the pure `state::step` update.
//!   4. Reject non-finite results.
//!   5. Append to the trajectory.
//!
//! RULES:
//!   - Parameters are validated before turn 0 exists.
//!   - State only moves forward; no turn is ever revised.
//!   - All randomness flows through the injected `ShockSource`.
//!   - Engines share nothing, so independent runs can coexist.

use crate::{
    config::ModelParams,
    error::{SimError, SimResult},
    mortgage::Valuation,
    rng::{ShockRng, ShockSource},
    state::{self, ClampsHit, EconomyState, Shocks},
    trajectory::Trajectory,
    types::{Seed, Turn},
};
use serde::{Deserialize, Serialize};

/// How many turns each bounding rule was active over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampCounts {
    pub zero_lower_bound: usize,
    pub deflation_floor:  usize,
    pub price_floor:      usize,
}

impl ClampCounts {
    fn record(&mut self, hit: &ClampsHit) {
        self.zero_lower_bound += usize::from(hit.zero_lower_bound);
        self.deflation_floor += usize::from(hit.deflation_floor);
        self.price_floor += usize::from(hit.price_floor);
    }
}

/// Everything a completed run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimOutcome {
    pub trajectory:   Trajectory,
    pub final_state:  EconomyState,
    /// Mortgage valuation of the final turn's property price.
    pub valuation:    Valuation,
    pub clamp_counts: ClampCounts,
}

impl SimOutcome {
    pub fn turns(&self) -> usize { self.trajectory.len() }
}

pub struct SimEngine<S: ShockSource = ShockRng> {
    params:            ModelParams,
    source:            S,
    current:           EconomyState,
    turn:              Turn,
    trajectory:        Trajectory,
    pending_inflation: f64,
    clamp_counts:      ClampCounts,
}

impl SimEngine<ShockRng> {
    /// Engine drawing from the macro stream of `seed`.
    pub fn seeded(params: ModelParams, seed: Seed) -> SimResult<Self> {
        Self::new(params, ShockRng::for_macro(seed))
    }
}

impl<S: ShockSource> SimEngine<S> {
    pub fn new(params: ModelParams, source: S) -> SimResult<Self> {
        params.validate()?;

        let current = EconomyState::initial(&params);
        let mut trajectory = Trajectory::with_capacity(params.turns);
        trajectory.push(&current);

        Ok(Self {
            params,
            source,
            current,
            turn: 0,
            trajectory,
            pending_inflation: 0.0,
            clamp_counts: ClampCounts::default(),
        })
    }

    pub fn params(&self) -> &ModelParams { &self.params }

    pub fn current_turn(&self) -> Turn { self.turn }

    pub fn current_state(&self) -> &EconomyState { &self.current }

    pub fn trajectory(&self) -> &Trajectory { &self.trajectory }

    pub fn is_finished(&self) -> bool {
        self.turn + 1 >= self.params.turns
    }

    /// Raise (or lower) the inflation the next step starts from by `delta`.
    /// Queued shocks accumulate until that step consumes them. Once every
    /// turn is computed there is no step left to carry one.
    pub fn queue_inflation_shock(&mut self, delta: f64) -> SimResult<()> {
        if self.is_finished() {
            log::warn!("turn={} inflation shock {delta:+.4} rejected: horizon reached", self.turn);
            return Err(SimError::HorizonExhausted { turns: self.params.turns });
        }
        self.pending_inflation += delta;
        log::debug!(
            "turn={} queued inflation shock {delta:+.4} (pending {:+.4})",
            self.turn,
            self.pending_inflation
        );
        Ok(())
    }

    /// Advance exactly one turn and return the new state.
    pub fn step(&mut self) -> SimResult<EconomyState> {
        if self.is_finished() {
            return Err(SimError::HorizonExhausted { turns: self.params.turns });
        }
        let turn = self.turn + 1;

        let shocks = Shocks {
            eps_y:  self.source.next_normal(0.0, self.params.eps_y_std)?,
            eps_pi: self.source.next_normal(0.0, self.params.eps_pi_std)?,
        };
        let prev = EconomyState {
            inflation: self.current.inflation + std::mem::take(&mut self.pending_inflation),
            ..self.current
        };

        let outcome = state::step(&prev, &self.params, shocks);

        if let Some(quantity) = outcome.state.first_non_finite() {
            log::error!("turn={turn} {quantity} diverged: {:?}", outcome.state);
            return Err(SimError::NonFinite { turn, quantity });
        }

        if outcome.clamps.zero_lower_bound {
            log::warn!("turn={turn} policy rate held at zero lower bound");
        }
        if outcome.clamps.deflation_floor {
            log::warn!(
                "turn={turn} inflation {:.4} below deflation floor; compounding at floor",
                outcome.state.inflation
            );
        }
        if outcome.clamps.price_floor {
            log::warn!("turn={turn} property price decline capped");
        }

        self.clamp_counts.record(&outcome.clamps);
        self.current = outcome.state;
        self.turn = turn;
        self.trajectory.push(&self.current);

        log::debug!(
            "turn={turn} y={:.3} pi={:.4} i={:.4} payout={:.2} price={:.2} rent={:.2}",
            self.current.output_gap,
            self.current.inflation,
            self.current.policy_rate,
            self.current.payout,
            self.current.property_price,
            self.current.rent
        );

        Ok(self.current)
    }

    /// Step to the horizon and value the final turn.
    pub fn run(mut self) -> SimResult<SimOutcome> {
        while !self.is_finished() {
            self.step()?;
        }

        let valuation = Valuation::of_state(&self.current);
        log::info!(
            "run complete: {} turns, final pi={:.4} i={:.4} price={:.2}, clamps {:?}",
            self.trajectory.len(),
            self.current.inflation,
            self.current.policy_rate,
            self.current.property_price,
            self.clamp_counts
        );

        Ok(SimOutcome {
            trajectory:   self.trajectory,
            final_state:  self.current,
            valuation,
            clamp_counts: self.clamp_counts,
        })
    }
}

/// Build a seeded engine and run it to completion.
pub fn run_seeded(params: ModelParams, seed: Seed) -> SimResult<SimOutcome> {
    SimEngine::seeded(params, seed)?.run()
}
