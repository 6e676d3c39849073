//! Discrete-time New-Keynesian macro model driving a board-game economy.
//!
//! Three core relations (IS curve, Phillips curve, Taylor rule) advance
//! output, inflation and the policy rate each turn; the game quantities
//! (GO payout, property price, rent) compound off the clamped inflation.
//! After the last turn the final property is valued for mortgaging.

pub mod config;
pub mod engine;
pub mod error;
pub mod mortgage;
pub mod rng;
pub mod shock_cards;
pub mod state;
pub mod summary;
pub mod trajectory;
pub mod types;

pub use config::ModelParams;
pub use engine::{run_seeded, SimEngine, SimOutcome};
pub use error::{SimError, SimResult};
pub use rng::{ShockRng, ShockSource};
pub use summary::RunSummary;
