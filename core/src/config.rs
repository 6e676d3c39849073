//! Model parameters — every constant the recurrence reads.
//!
//! Parameters are fixed for the lifetime of a run. The crate reads
//! no files; hosts may deserialize `ModelParams` from whatever
//! format they already use.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Horizon T. Turn 0 is the initial state, so T turns means T-1 steps.
    pub turns:       usize,
    /// Potential output.
    pub y_bar:       f64,
    /// Inflation target.
    pub pi_star:     f64,
    /// Natural real interest rate.
    pub r_bar:       f64,
    /// Base GO payout.
    pub s0:          f64,
    /// Base property price.
    pub p0:          f64,
    /// Base rent level.
    pub r0:          f64,

    // ── IS / Phillips / Taylor coefficients ──────────
    pub sigma:       f64,
    pub beta:        f64,
    pub kappa:       f64,
    pub phi_pi:      f64,
    pub phi_y:       f64,

    // ── Property market ──────────────────────────────
    /// Sensitivity of property price to (clamped) inflation.
    pub lambda_prop: f64,

    // ── Shock distribution ───────────────────────────
    pub eps_y_std:   f64,
    pub eps_pi_std:  f64,
}

impl ModelParams {
    /// The standalone reference calculation.
    pub fn reference() -> Self {
        Self {
            turns:       50,
            y_bar:       100.0,
            pi_star:     0.02,
            r_bar:       0.02,
            s0:          200.0,
            p0:          300.0,
            r0:          50.0,
            sigma:       1.0,
            beta:        0.60,
            kappa:       0.10,
            phi_pi:      1.5,
            phi_y:       0.25,
            lambda_prop: 0.5,
            eps_y_std:   1.0,
            eps_pi_std:  0.005,
        }
    }

    /// Calibration used by the interactive board game: same structure,
    /// half the shock volatility.
    pub fn board_game() -> Self {
        Self {
            eps_y_std:  0.5,
            eps_pi_std: 0.0025,
            ..Self::reference()
        }
    }

    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_shock_std(mut self, eps_y_std: f64, eps_pi_std: f64) -> Self {
        self.eps_y_std = eps_y_std;
        self.eps_pi_std = eps_pi_std;
        self
    }

    /// Turn-0 policy rate: natural rate plus target inflation.
    pub fn initial_policy_rate(&self) -> f64 {
        self.r_bar + self.pi_star
    }

    /// Reject any configuration the recurrence cannot run on.
    pub fn validate(&self) -> SimResult<()> {
        if self.turns == 0 {
            return Err(SimError::invalid("turns", "must be at least 1 (empty horizon)"));
        }

        let coefficients = [
            ("y_bar", self.y_bar),
            ("pi_star", self.pi_star),
            ("r_bar", self.r_bar),
            ("s0", self.s0),
            ("p0", self.p0),
            ("r0", self.r0),
            ("sigma", self.sigma),
            ("beta", self.beta),
            ("kappa", self.kappa),
            ("phi_pi", self.phi_pi),
            ("phi_y", self.phi_y),
            ("lambda_prop", self.lambda_prop),
            ("eps_y_std", self.eps_y_std),
            ("eps_pi_std", self.eps_pi_std),
        ];
        for (field, value) in coefficients {
            if !value.is_finite() {
                return Err(SimError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.eps_y_std < 0.0 {
            return Err(SimError::invalid("eps_y_std", format!("must be >= 0, got {}", self.eps_y_std)));
        }
        if self.eps_pi_std < 0.0 {
            return Err(SimError::invalid("eps_pi_std", format!("must be >= 0, got {}", self.eps_pi_std)));
        }
        // Rent divides by p0; payout compounds from s0.
        if self.p0 <= 0.0 {
            return Err(SimError::invalid("p0", format!("must be > 0, got {}", self.p0)));
        }
        if self.s0 <= 0.0 {
            return Err(SimError::invalid("s0", format!("must be > 0, got {}", self.s0)));
        }
        if self.r0 < 0.0 {
            return Err(SimError::invalid("r0", format!("must be >= 0, got {}", self.r0)));
        }
        Ok(())
    }
}

impl Default for ModelParams {
    fn default() -> Self { Self::reference() }
}
