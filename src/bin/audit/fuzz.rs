// Price-band fuzzing: random market states through the Voro formula,
// checking the tanh bound holds everywhere.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use voro_engine::voro::{self, price_market, MarketState};

use crate::report::{CheckOutcome, Stats};

const TOKEN_RANGE: f64 = 10_000_000.0;
const FLOW_RANGE: f64 = 1_000_000.0;

/// Hand-picked states that historically found the edges: degenerate flow,
/// single-sided books, astronomically large positions.
fn edge_states() -> Vec<MarketState> {
    vec![
        MarketState { long_tokens: 0.0, short_tokens: 0.0, buy_volume: 0.0, sell_volume: 0.0 },
        MarketState { long_tokens: 1e18, short_tokens: 0.0, buy_volume: 1e18, sell_volume: 0.0 },
        MarketState { long_tokens: 0.0, short_tokens: 1e18, buy_volume: 0.0, sell_volume: 1e18 },
        MarketState { long_tokens: f64::MAX / 4.0, short_tokens: 0.0, buy_volume: 1.0, sell_volume: 0.0 },
        MarketState { long_tokens: 1.0, short_tokens: 0.0, buy_volume: 1e-12, sell_volume: 0.0 },
    ]
}

/// Run `states` random states plus the edge set; every price must stay in
/// `[P0(1-A), P0(1+A)]` and every breakdown field must be finite.
/// Returns the outcome and the distribution of band margin (distance from
/// the nearer band edge).
pub fn check_price_band(states: usize, base_seed: u64) -> (CheckOutcome, Stats) {
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
    let lo = voro::LISTING_PRICE * (1.0 - voro::AMPLITUDE);
    let hi = voro::LISTING_PRICE * (1.0 + voro::AMPLITUDE);

    let mut margins = Vec::with_capacity(states + 5);
    let mut checked = 0u64;

    let mut all_states = edge_states();
    for _ in 0..states {
        all_states.push(MarketState {
            long_tokens: rng.gen_range(0.0..TOKEN_RANGE),
            short_tokens: rng.gen_range(0.0..TOKEN_RANGE),
            buy_volume: rng.gen_range(0.0..FLOW_RANGE),
            sell_volume: rng.gen_range(0.0..FLOW_RANGE),
        });
    }

    for state in &all_states {
        let breakdown = price_market(state);
        checked += 1;
        if !breakdown.price.is_finite() || !breakdown.flow_ratio.is_finite() {
            return (
                CheckOutcome::fail(
                    "voro-price-band",
                    checked,
                    format!("non-finite breakdown for {:?}", state),
                ),
                Stats::from_samples(&margins),
            );
        }
        if breakdown.price < lo || breakdown.price > hi {
            return (
                CheckOutcome::fail(
                    "voro-price-band",
                    checked,
                    format!("price {} escaped [{}, {}] for {:?}", breakdown.price, lo, hi, state),
                ),
                Stats::from_samples(&margins),
            );
        }
        margins.push((breakdown.price - lo).min(hi - breakdown.price));
    }

    (
        CheckOutcome::pass(
            "voro-price-band",
            checked,
            format!("all prices within [{:.2}, {:.2}]", lo, hi),
        ),
        Stats::from_samples(&margins),
    )
}

/// The jitter constructor must clamp anything a hostile caller passes.
pub fn check_jitter_sanitizing(states: usize, base_seed: u64) -> CheckOutcome {
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(1));
    let mut checked = 0u64;
    for _ in 0..states {
        let state = MarketState::with_jitter(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        checked += 1;
        if state.validate().is_err() {
            return CheckOutcome::fail(
                "jitter-sanitizing",
                checked,
                format!("negative field slipped through: {:?}", state),
            );
        }
    }
    CheckOutcome::pass("jitter-sanitizing", checked, "all jittered states non-negative".into())
}
