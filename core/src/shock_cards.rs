//! Economic shock cards — one-off inflation surprises drawn during play.
//!
//! A drawn card raises or lowers the inflation the next turn starts from,
//! so it feeds both the IS curve and inflation persistence. The recorded
//! turn is never rewritten; see `SimEngine::queue_inflation_shock`.

use crate::{
    engine::SimEngine,
    error::SimResult,
    rng::{ShockRng, ShockSource, ShockStream},
    types::Seed,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockCard {
    pub text:            &'static str,
    pub inflation_delta: f64,
}

impl ShockCard {
    pub fn apply<S: ShockSource>(&self, engine: &mut SimEngine<S>) -> SimResult<()> {
        log::info!("shock card: {} ({:+.2}%)", self.text, self.inflation_delta * 100.0);
        engine.queue_inflation_shock(self.inflation_delta)
    }

    pub fn is_inflationary(&self) -> bool {
        self.inflation_delta > 0.0
    }
}

pub const ECONOMIC_SHOCK_CARDS: [ShockCard; 12] = [
    ShockCard { text: "Global oil price spike! Inflation temporarily rises.",                               inflation_delta:  0.03 },
    ShockCard { text: "Supply chain crisis deepens. Inflation gets worse.",                                 inflation_delta:  0.02 },
    ShockCard { text: "Central Bank unexpectedly raises interest rate targets. Inflation cools.",           inflation_delta: -0.015 },
    ShockCard { text: "Breakthrough in AI boosts productivity! Inflation eases.",                           inflation_delta: -0.02 },
    ShockCard { text: "Government announces major infrastructure spending. Inflationary pressures mount.",  inflation_delta:  0.025 },
    ShockCard { text: "Bumper harvest leads to lower food prices. Disinflationary shock.",                  inflation_delta: -0.01 },
    ShockCard { text: "New trade tariffs imposed on imports. Prices jump.",                                 inflation_delta:  0.015 },
    ShockCard { text: "Consumer confidence surges, spending increases. Inflation ticks up.",                inflation_delta:  0.01 },
    ShockCard { text: "A major bank requires a bailout, shaking confidence. Mildly deflationary.",          inflation_delta: -0.005 },
    ShockCard { text: "Technological stagnation reported in key sectors. Inflationary pressure builds.",    inflation_delta:  0.01 },
    ShockCard { text: "International peace treaty signed, opening new markets. Disinflationary.",           inflation_delta: -0.01 },
    ShockCard { text: "Housing market boom cools faster than expected. Deflationary pressure.",             inflation_delta: -0.015 },
];

/// Uniform draws (with replacement) from the shock card table.
pub struct ShockDeck {
    rng: ShockRng,
}

impl ShockDeck {
    pub fn new(master_seed: Seed) -> Self {
        Self { rng: ShockRng::new(master_seed, ShockStream::ShockCards) }
    }

    pub fn draw(&mut self) -> &'static ShockCard {
        &ECONOMIC_SHOCK_CARDS[self.rng.next_index(ECONOMIC_SHOCK_CARDS.len())]
    }
}
