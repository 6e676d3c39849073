//! Mortgage valuations derived from a property price and policy rate.

use crate::state::EconomyState;
use serde::{Deserialize, Serialize};

/// Share of the property price paid out when mortgaging.
pub const MORTGAGE_LOAN_TO_VALUE: f64 = 0.5;
/// Flat premium on top of the policy rate when unmortgaging.
pub const UNMORTGAGE_PREMIUM: f64 = 0.02;

pub fn mortgage_amount(property_price: f64) -> f64 {
    MORTGAGE_LOAN_TO_VALUE * property_price
}

/// Principal plus one turn of policy-rate interest plus the premium.
pub fn unmortgage_cost(property_price: f64, policy_rate: f64) -> f64 {
    mortgage_amount(property_price) * (1.0 + policy_rate + UNMORTGAGE_PREMIUM)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub mortgage_amount: f64,
    pub unmortgage_cost: f64,
}

impl Valuation {
    pub fn new(property_price: f64, policy_rate: f64) -> Self {
        Self {
            mortgage_amount: mortgage_amount(property_price),
            unmortgage_cost: unmortgage_cost(property_price, policy_rate),
        }
    }

    pub fn of_state(state: &EconomyState) -> Self {
        Self::new(state.property_price, state.policy_rate)
    }

    /// Whole-currency amounts as quoted on the game board.
    pub fn rounded(&self) -> (i64, i64) {
        (self.mortgage_amount.round() as i64, self.unmortgage_cost.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_property_valuation() {
        let v = Valuation::new(300.0, 0.04);
        assert_eq!(v.mortgage_amount, 150.0);
        assert!((v.unmortgage_cost - 159.0).abs() < 1e-9);
        assert_eq!(v.rounded(), (150, 159));
    }

    #[test]
    fn unmortgage_at_zero_rate_is_premium_only() {
        assert!((unmortgage_cost(200.0, 0.0) - 102.0).abs() < 1e-12);
    }
}
