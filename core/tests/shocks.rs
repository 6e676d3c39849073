//! Injected shock sources, queued inflation shocks, and divergence detection.

use dsge_core::{
    shock_cards::{ShockDeck, ECONOMIC_SHOCK_CARDS},
    state::{self, EconomyState, Shocks},
    ModelParams, ShockSource, SimEngine, SimError, SimResult,
};
use std::collections::VecDeque;

/// Replays fixed standard-normal values, scaled by the requested std dev.
struct ScriptedShocks {
    z: VecDeque<f64>,
    calls: usize,
}

impl ScriptedShocks {
    fn new(z: &[f64]) -> Self {
        Self { z: z.iter().copied().collect(), calls: 0 }
    }
}

impl ShockSource for ScriptedShocks {
    fn next_normal(&mut self, mean: f64, std_dev: f64) -> SimResult<f64> {
        self.calls += 1;
        Ok(mean + std_dev * self.z.pop_front().unwrap_or(0.0))
    }
}

#[test]
fn engine_draws_output_shock_before_inflation_shock() {
    let params = ModelParams::reference().with_shock_std(1.0, 0.01);
    let mut source = ScriptedShocks::new(&[2.0, -1.0]);
    let mut engine = SimEngine::new(params.clone(), &mut source).unwrap();
    let s1 = engine.step().unwrap();

    let expected = state::step(
        &EconomyState::initial(&params),
        &params,
        Shocks { eps_y: 2.0, eps_pi: -0.01 },
    )
    .state;
    assert_eq!(s1, expected);
    drop(engine);
    assert_eq!(source.calls, 2, "Exactly two draws per turn");
}

#[test]
fn full_run_draws_two_shocks_per_step() {
    let mut source = ScriptedShocks::new(&[]);
    SimEngine::new(ModelParams::reference(), &mut source)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(source.calls, 2 * 49);
}

#[test]
fn queued_inflation_shock_moves_the_starting_inflation() {
    let params = ModelParams::reference().with_shock_std(0.0, 0.0);
    let mut engine = SimEngine::seeded(params.clone(), 0).unwrap();

    engine.queue_inflation_shock(0.02).unwrap();
    engine.queue_inflation_shock(0.01).unwrap();
    let s1 = engine.step().unwrap();

    // Starting inflation 0.05: the real rate falls, so output rises,
    // and the higher inflation persists through beta.
    assert!((s1.output_gap - 100.03).abs() < 1e-9, "output_gap = {}", s1.output_gap);
    assert!((s1.inflation - 0.033).abs() < 1e-12, "inflation = {}", s1.inflation);
    assert_eq!(
        engine.trajectory().inflation[0], 0.02,
        "Recorded turn 0 must not be revised"
    );

    let s2 = engine.step().unwrap();
    let expected = state::step(&s1, &params, Shocks::default()).state;
    assert_eq!(s2, expected, "Queued shock leaked into turn 2");
}

#[test]
fn shock_card_shifts_inflation_the_step_starts_from() {
    let params = ModelParams::reference().with_shock_std(0.0, 0.0);
    let mut engine = SimEngine::seeded(params.clone(), 0).unwrap();

    let mut deck = ShockDeck::new(11);
    let card = deck.draw();
    assert!(ECONOMIC_SHOCK_CARDS.contains(card));
    card.apply(&mut engine).unwrap();

    let initial = EconomyState::initial(&params);
    let shifted = EconomyState {
        inflation: initial.inflation + card.inflation_delta,
        ..initial
    };
    let expected = state::step(&shifted, &params, Shocks::default()).state;
    assert_eq!(engine.step().unwrap(), expected, "Card '{}' applied wrongly", card.text);
}

#[test]
fn shock_after_the_last_turn_is_rejected() {
    let mut single = SimEngine::seeded(ModelParams::reference().with_turns(1), 0).unwrap();
    assert_eq!(
        single.queue_inflation_shock(0.01),
        Err(SimError::HorizonExhausted { turns: 1 })
    );

    let mut engine = SimEngine::seeded(ModelParams::reference().with_turns(2), 0).unwrap();
    engine.queue_inflation_shock(0.01).unwrap();
    engine.step().unwrap();
    assert!(engine.queue_inflation_shock(0.01).is_err());
    assert!(ECONOMIC_SHOCK_CARDS[0].apply(&mut engine).is_err());
}

#[test]
fn nan_policy_rate_stops_the_run() {
    let params = ModelParams {
        phi_pi: 1e308,
        phi_y: -1e308,
        ..ModelParams::reference().with_shock_std(1.0, 1.0)
    };
    let mut engine = SimEngine::new(params, ScriptedShocks::new(&[10.0, 2.0])).unwrap();

    let err = engine.step().unwrap_err();
    assert_eq!(err, SimError::NonFinite { turn: 1, quantity: "policy_rate" });
    assert_eq!(engine.trajectory().len(), 1);
}

#[test]
fn non_finite_result_stops_the_run() {
    let params = ModelParams {
        kappa: 1e308,
        ..ModelParams::reference().with_shock_std(1.0, 0.0)
    };
    let source = ScriptedShocks::new(&[10.0, 0.0]);
    let mut engine = SimEngine::new(params, source).unwrap();

    let err = engine.step().unwrap_err();
    assert_eq!(err, SimError::NonFinite { turn: 1, quantity: "inflation" });
    assert_eq!(engine.trajectory().len(), 1, "Diverged turn must not be recorded");
    assert_eq!(engine.current_turn(), 0);
}

#[test]
fn run_surfaces_divergence_instead_of_partial_result() {
    let params = ModelParams {
        kappa: 1e308,
        ..ModelParams::reference().with_shock_std(1.0, 0.0)
    };
    let result = SimEngine::new(params, ScriptedShocks::new(&[10.0])).unwrap().run();
    assert!(matches!(result, Err(SimError::NonFinite { turn: 1, .. })));
}
