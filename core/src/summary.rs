//! End-of-run summary — the final turn in human-readable form.
//!
//! Rates print as percentages, currency with `$`, both to two decimals.

use crate::engine::SimOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub turns:           usize,
    pub inflation:       f64,
    pub output_gap:      f64,
    pub policy_rate:     f64,
    pub payout:          f64,
    pub property_price:  f64,
    pub rent:            f64,
    pub mortgage_amount: f64,
    pub unmortgage_cost: f64,
}

impl From<&SimOutcome> for RunSummary {
    fn from(outcome: &SimOutcome) -> Self {
        let last = outcome.final_state;
        Self {
            turns:           outcome.turns(),
            inflation:       last.inflation,
            output_gap:      last.output_gap,
            policy_rate:     last.policy_rate,
            payout:          last.payout,
            property_price:  last.property_price,
            rent:            last.rent,
            mortgage_amount: outcome.valuation.mortgage_amount,
            unmortgage_cost: outcome.valuation.unmortgage_cost,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Inflation Rate: {:.2}%", self.inflation * 100.0)?;
        writeln!(f, "Final Output: {:.2}", self.output_gap)?;
        writeln!(f, "Final Interest Rate: {:.2}%", self.policy_rate * 100.0)?;
        writeln!(f, "GO Payout (Turn {}): ${:.2}", self.turns, self.payout)?;
        writeln!(f, "Final Property Price: ${:.2}", self.property_price)?;
        writeln!(f, "Final Rent Level: ${:.2}", self.rent)?;
        writeln!(f, "Mortgage Amount: ${:.2}", self.mortgage_amount)?;
        write!(f, "Unmortgage Cost: ${:.2}", self.unmortgage_cost)
    }
}
