//! One turn of the economy and the pure update that advances it.
//!
//! EVALUATION ORDER (fixed, every later line reads earlier ones):
//!   1. Output gap      (IS curve, previous turn's real rate gap)
//!   2. Inflation       (Phillips curve, this turn's output)
//!   3. Policy rate     (Taylor rule, floored at zero)
//!   4. Clamped inflation used for compounding
//!   5. Payout
//!   6. Property price  (single-turn decline floored at 5%)
//!   7. Rent            (proportional to cumulative price change)

use crate::config::ModelParams;
use serde::{Deserialize, Serialize};

/// Nominal policy rate floor.
pub const ZERO_LOWER_BOUND: f64 = 0.0;
/// Effective inflation never compounds below -25% per turn.
pub const DEFLATION_FLOOR: f64 = -0.25;
/// Property price never falls below 95% of the prior turn.
pub const PRICE_DECLINE_FLOOR: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomyState {
    pub output_gap:     f64,
    pub inflation:      f64,
    pub policy_rate:    f64,
    pub payout:         f64,
    pub property_price: f64,
    pub rent:           f64,
}

impl EconomyState {
    /// Turn-0 conditions.
    pub fn initial(params: &ModelParams) -> Self {
        Self {
            output_gap:     params.y_bar,
            inflation:      params.pi_star,
            policy_rate:    params.initial_policy_rate(),
            payout:         params.s0,
            property_price: params.p0,
            rent:           params.r0,
        }
    }

    /// Name of the first quantity that is NaN or infinite, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("output_gap", self.output_gap),
            ("inflation", self.inflation),
            ("policy_rate", self.policy_rate),
            ("payout", self.payout),
            ("property_price", self.property_price),
            ("rent", self.rent),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}

/// The two exogenous draws for a single turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shocks {
    pub eps_y:  f64,
    pub eps_pi: f64,
}

/// Which bounding rules were active on a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampsHit {
    pub zero_lower_bound: bool,
    pub deflation_floor:  bool,
    pub price_floor:      bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state:  EconomyState,
    pub clamps: ClampsHit,
}

/// Advance one turn. Pure: the same inputs always give the same output.
pub fn step(prev: &EconomyState, params: &ModelParams, shocks: Shocks) -> StepOutcome {
    let output_gap = params.y_bar
        - params.sigma * (prev.policy_rate - prev.inflation - params.r_bar)
        + shocks.eps_y;

    let inflation = params.beta * prev.inflation
        + params.kappa * (output_gap - params.y_bar)
        + shocks.eps_pi;

    let raw_rate = params.r_bar
        + inflation
        + params.phi_pi * (inflation - params.pi_star)
        + params.phi_y * (output_gap - params.y_bar);
    // f64::max would turn a NaN rate into zero; leave it for the finiteness check.
    let policy_rate = if raw_rate.is_nan() { raw_rate } else { raw_rate.max(ZERO_LOWER_BOUND) };

    let clamped_inflation = inflation.max(DEFLATION_FLOOR);

    let payout = prev.payout * (1.0 + clamped_inflation);

    let price_growth = 1.0 + params.lambda_prop * clamped_inflation;
    let property_price = prev.property_price * price_growth.max(PRICE_DECLINE_FLOOR);

    let rent = params.r0 * property_price / params.p0;

    StepOutcome {
        state: EconomyState {
            output_gap,
            inflation,
            policy_rate,
            payout,
            property_price,
            rent,
        },
        clamps: ClampsHit {
            zero_lower_bound: raw_rate < ZERO_LOWER_BOUND,
            deflation_floor:  inflation < DEFLATION_FLOOR,
            price_floor:      price_growth < PRICE_DECLINE_FLOOR,
        },
    }
}
