//! Per-turn history — six parallel sequences indexed by turn.
//!
//! RULE: sequences only grow forward. Every push appends one value
//! to each sequence, so all six always have the same length.

use crate::{state::EconomyState, types::Turn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub output_gap:     Vec<f64>,
    pub inflation:      Vec<f64>,
    pub policy_rate:    Vec<f64>,
    pub payout:         Vec<f64>,
    pub property_price: Vec<f64>,
    pub rent:           Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(turns: usize) -> Self {
        Self {
            output_gap:     Vec::with_capacity(turns),
            inflation:      Vec::with_capacity(turns),
            policy_rate:    Vec::with_capacity(turns),
            payout:         Vec::with_capacity(turns),
            property_price: Vec::with_capacity(turns),
            rent:           Vec::with_capacity(turns),
        }
    }

    pub fn push(&mut self, state: &EconomyState) {
        self.output_gap.push(state.output_gap);
        self.inflation.push(state.inflation);
        self.policy_rate.push(state.policy_rate);
        self.payout.push(state.payout);
        self.property_price.push(state.property_price);
        self.rent.push(state.rent);
    }

    pub fn len(&self) -> usize { self.inflation.len() }

    pub fn is_empty(&self) -> bool { self.inflation.is_empty() }

    pub fn state_at(&self, turn: Turn) -> Option<EconomyState> {
        if turn >= self.len() {
            return None;
        }
        Some(EconomyState {
            output_gap:     self.output_gap[turn],
            inflation:      self.inflation[turn],
            policy_rate:    self.policy_rate[turn],
            payout:         self.payout[turn],
            property_price: self.property_price[turn],
            rent:           self.rent[turn],
        })
    }

    pub fn last(&self) -> Option<EconomyState> {
        self.len().checked_sub(1).and_then(|t| self.state_at(t))
    }
}
