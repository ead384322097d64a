// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Voro Pricing Formula
//
// Closed-form market maker: net long/short exposure plus recent flow maps
// to a price through a bounded tanh curve. No randomness, no per-entity
// identity, no stream access: the formula is re-derivable from the state
// and the constants below alone.

use serde::{Deserialize, Serialize};

use crate::money;

// ─── Constants ──────────────────────────────────────────────────────────────

/// Tanh amplitude; the price can never leave `P0 * (1 ± AMPLITUDE)`.
pub const AMPLITUDE: f64 = 1.0;
/// Flow boost applied while the market is net buying.
pub const MU_UP: f64 = 0.4;
/// Flow boost applied while the market is net selling.
pub const MU_DOWN: f64 = 0.3;
/// Shorting efficiency: one short token offsets 0.75 long tokens.
pub const SHORT_EFFICIENCY: f64 = 0.75;
/// Base liquidity depth.
pub const BASE_LIQUIDITY: f64 = 100_000.0;
/// Liquidity growth per active user.
pub const LIQUIDITY_PER_USER: f64 = 500.0;
/// Active users assumed for liquidity scaling.
pub const ACTIVE_USERS: f64 = 1_000.0;
/// IPO/base price in USD.
pub const LISTING_PRICE: f64 = 100.0;

/// Guards the flow ratio against `buy = sell = 0`.
const FLOW_EPSILON: f64 = 1e-9;

const DEFAULT_LONG_TOKENS: f64 = 50_000.0;
const DEFAULT_SHORT_TOKENS: f64 = 30_000.0;
const DEFAULT_BUY_VOLUME: f64 = 6_000.0;
const DEFAULT_SELL_VOLUME: f64 = 4_000.0;

// Jitter spans around the defaults, applied once at construction by the
// caller, never inside the pricing formula.
const LONG_JITTER_SPAN: f64 = 10_000.0;
const SHORT_JITTER_SPAN: f64 = 6_000.0;
const FLOW_JITTER_SPAN: f64 = 2_000.0;

const REPORT_FLOW_DP: u32 = 3;
const REPORT_TOKEN_DP: u32 = 2;

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("token positions must be non-negative")]
    NegativeTokens,
    #[error("flow volumes must be non-negative")]
    NegativeFlow,
}

// ─── MarketState ────────────────────────────────────────────────────────────

/// Aggregate market state fed to the pricing formula.
///
/// All fields are token/volume counts and must be non-negative;
/// [`MarketState::sanitized`] clamps anything below zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    /// Outstanding long tokens (T_long).
    pub long_tokens: f64,
    /// Outstanding short tokens (T_short).
    pub short_tokens: f64,
    /// Recent buy volume (B_H).
    pub buy_volume: f64,
    /// Recent sell + short volume (S_H).
    pub sell_volume: f64,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            long_tokens: DEFAULT_LONG_TOKENS,
            short_tokens: DEFAULT_SHORT_TOKENS,
            buy_volume: DEFAULT_BUY_VOLUME,
            sell_volume: DEFAULT_SELL_VOLUME,
        }
    }
}

impl MarketState {
    /// Build a state jittered around the defaults. The four `unit` values
    /// come from whatever randomness the CALLER wants (a JS `Math.random()`
    /// at page load, a seeded RNG in the audit harness) and are expected in
    /// `[0, 1)`; the formula itself stays pure.
    pub fn with_jitter(u_long: f64, u_short: f64, u_buy: f64, u_sell: f64) -> Self {
        Self {
            long_tokens: DEFAULT_LONG_TOKENS + (u_long - 0.5) * LONG_JITTER_SPAN,
            short_tokens: DEFAULT_SHORT_TOKENS + (u_short - 0.5) * SHORT_JITTER_SPAN,
            buy_volume: DEFAULT_BUY_VOLUME + (u_buy - 0.5) * FLOW_JITTER_SPAN,
            sell_volume: DEFAULT_SELL_VOLUME + (u_sell - 0.5) * FLOW_JITTER_SPAN,
        }
        .sanitized()
    }

    /// Clamp every field to non-negative.
    pub fn sanitized(mut self) -> Self {
        self.long_tokens = self.long_tokens.max(0.0);
        self.short_tokens = self.short_tokens.max(0.0);
        self.buy_volume = self.buy_volume.max(0.0);
        self.sell_volume = self.sell_volume.max(0.0);
        self
    }

    /// Strict validation for callers that want to reject rather than clamp.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.long_tokens < 0.0 || self.short_tokens < 0.0 {
            return Err(StateError::NegativeTokens);
        }
        if self.buy_volume < 0.0 || self.sell_volume < 0.0 {
            return Err(StateError::NegativeFlow);
        }
        Ok(())
    }
}

// ─── PriceBreakdown ─────────────────────────────────────────────────────────

/// Every intermediate of one pricing pass, for the simulate screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Net long exposure after discounting shorts (T_eff).
    pub effective_tokens: f64,
    /// Normalized net buy pressure in (-1, 1) (f).
    pub flow_ratio: f64,
    /// Exposure after the flow boost (T_eff_prime).
    pub boosted_tokens: f64,
    /// Liquidity denominator (L_global).
    pub global_liquidity: f64,
    /// Final bounded price (P).
    pub price: f64,
}

/// Liquidity denominator: `L0 + ALPHA * USERS`.
pub fn global_liquidity() -> f64 {
    BASE_LIQUIDITY + LIQUIDITY_PER_USER * ACTIVE_USERS
}

/// Price the market.
///
/// ```text
/// T_eff       = T_long - S_SHORT * T_short
/// f           = (B_H - S_H) / (B_H + S_H + eps)
/// T_eff_prime = T_eff * (1 + (f > 0 ? MU_UP * f : MU_DOWN * f))
/// P           = P0 * (1 + A * tanh(T_eff_prime / L_global))
/// ```
///
/// `tanh` is bounded in (-1, 1), so for any finite state the price stays
/// inside `[P0 * (1 - A), P0 * (1 + A)]`. Negative inputs are clamped to
/// zero before pricing.
pub fn price_market(state: &MarketState) -> PriceBreakdown {
    let state = state.sanitized();

    let effective_tokens = state.long_tokens - SHORT_EFFICIENCY * state.short_tokens;
    let flow_ratio = (state.buy_volume - state.sell_volume)
        / (state.buy_volume + state.sell_volume + FLOW_EPSILON);
    let boost = if flow_ratio > 0.0 {
        MU_UP * flow_ratio
    } else {
        MU_DOWN * flow_ratio
    };
    let boosted_tokens = effective_tokens * (1.0 + boost);
    let global_liquidity = global_liquidity();
    let price = LISTING_PRICE * (1.0 + AMPLITUDE * (boosted_tokens / global_liquidity).tanh());

    PriceBreakdown {
        effective_tokens,
        flow_ratio,
        boosted_tokens,
        global_liquidity,
        price,
    }
}

// ─── SimulateReport ─────────────────────────────────────────────────────────

/// Wire payload of the simulate screen. Counts serialize as rounded
/// integers, derived quantities as fixed-decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateReport {
    #[serde(rename = "P0")]
    pub listing_price: u64,
    #[serde(rename = "L_global")]
    pub global_liquidity: u64,
    #[serde(rename = "T_long")]
    pub long_tokens: i64,
    #[serde(rename = "T_short")]
    pub short_tokens: i64,
    #[serde(rename = "B_H")]
    pub buy_volume: i64,
    #[serde(rename = "S_H")]
    pub sell_volume: i64,
    #[serde(rename = "f")]
    pub flow_ratio: String,
    #[serde(rename = "T_eff")]
    pub effective_tokens: String,
    #[serde(rename = "T_eff_prime")]
    pub boosted_tokens: String,
    #[serde(rename = "newPrice")]
    pub new_price: String,
}

impl SimulateReport {
    pub fn from_state(state: &MarketState) -> Self {
        let state = state.sanitized();
        let breakdown = price_market(&state);
        Self {
            listing_price: LISTING_PRICE as u64,
            global_liquidity: breakdown.global_liquidity as u64,
            long_tokens: state.long_tokens.round() as i64,
            short_tokens: state.short_tokens.round() as i64,
            buy_volume: state.buy_volume.round() as i64,
            sell_volume: state.sell_volume.round() as i64,
            flow_ratio: money::format_fixed(breakdown.flow_ratio, REPORT_FLOW_DP),
            effective_tokens: money::format_fixed(breakdown.effective_tokens, REPORT_TOKEN_DP),
            boosted_tokens: money::format_fixed(breakdown.boosted_tokens, REPORT_TOKEN_DP),
            new_price: money::format_fixed(breakdown.price, REPORT_TOKEN_DP),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_breakdown() {
        // T_long=50000, T_short=30000, B_H=6000, S_H=4000:
        // T_eff=27500, f=0.2, T_eff_prime=29700, L_global=600000,
        // P = 100 * (1 + tanh(0.0495)) ≈ 104.95.
        let b = price_market(&MarketState::default());
        assert!((b.effective_tokens - 27_500.0).abs() < 1e-9);
        assert!((b.flow_ratio - 0.2).abs() < 1e-6);
        assert!((b.boosted_tokens - 29_700.0).abs() < 1e-6);
        assert!((b.global_liquidity - 600_000.0).abs() < f64::EPSILON);
        assert!((b.price - 104.946).abs() < 0.01, "price {}", b.price);
    }

    #[test]
    fn test_price_band_extremes() {
        let lo = LISTING_PRICE * (1.0 - AMPLITUDE);
        let hi = LISTING_PRICE * (1.0 + AMPLITUDE);

        let all_long = MarketState {
            long_tokens: 1e15,
            short_tokens: 0.0,
            buy_volume: 1e12,
            sell_volume: 0.0,
        };
        let p = price_market(&all_long).price;
        assert!(p <= hi && p > LISTING_PRICE, "price {}", p);

        let all_short = MarketState {
            long_tokens: 0.0,
            short_tokens: 1e15,
            buy_volume: 0.0,
            sell_volume: 1e12,
        };
        let p = price_market(&all_short).price;
        assert!(p >= lo && p < LISTING_PRICE, "price {}", p);
    }

    #[test]
    fn test_degenerate_flow_is_finite() {
        let state = MarketState {
            long_tokens: 10_000.0,
            short_tokens: 0.0,
            buy_volume: 0.0,
            sell_volume: 0.0,
        };
        let b = price_market(&state);
        assert!(b.flow_ratio.is_finite());
        assert_eq!(b.flow_ratio, 0.0);
        assert!(b.price.is_finite());
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let state = MarketState {
            long_tokens: -5.0,
            short_tokens: -5.0,
            buy_volume: -5.0,
            sell_volume: -5.0,
        };
        assert_eq!(state.validate(), Err(StateError::NegativeTokens));
        let b = price_market(&state);
        assert_eq!(b.effective_tokens, 0.0);
        assert!((b.price - LISTING_PRICE).abs() < 1e-9);
    }

    #[test]
    fn test_sell_pressure_discounts_less_than_buy_boosts() {
        let buy_side = MarketState {
            buy_volume: 8_000.0,
            sell_volume: 2_000.0,
            ..MarketState::default()
        };
        let sell_side = MarketState {
            buy_volume: 2_000.0,
            sell_volume: 8_000.0,
            ..MarketState::default()
        };
        let up = price_market(&buy_side);
        let down = price_market(&sell_side);
        // MU_UP (0.4) > MU_DOWN (0.3): symmetric flow moves the boosted
        // exposure further on the buy side.
        let base = price_market(&MarketState {
            buy_volume: 5_000.0,
            sell_volume: 5_000.0,
            ..MarketState::default()
        });
        assert!(up.boosted_tokens - base.boosted_tokens > base.boosted_tokens - down.boosted_tokens);
    }

    #[test]
    fn test_with_jitter_centered_and_clamped() {
        let centered = MarketState::with_jitter(0.5, 0.5, 0.5, 0.5);
        assert_eq!(centered, MarketState::default());

        // Unit values below zero would drive flow volumes negative; they
        // must clamp rather than poison the flow ratio.
        let floored = MarketState::with_jitter(0.0, 0.0, -10.0, -10.0);
        assert_eq!(floored.buy_volume, 0.0);
        assert_eq!(floored.sell_volume, 0.0);
        assert!(price_market(&floored).price.is_finite());
    }

    #[test]
    fn test_report_formatting() {
        let report = SimulateReport::from_state(&MarketState::default());
        assert_eq!(report.listing_price, 100);
        assert_eq!(report.global_liquidity, 600_000);
        assert_eq!(report.long_tokens, 50_000);
        assert_eq!(report.flow_ratio, "0.200");
        assert_eq!(report.effective_tokens, "27500.00");
        assert_eq!(report.boosted_tokens, "29700.00");
        assert_eq!(report.new_price, "104.95");
    }

    #[test]
    fn test_report_json_field_names() {
        let report = SimulateReport::from_state(&MarketState::default());
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "P0", "L_global", "T_long", "T_short", "B_H", "S_H", "f", "T_eff",
            "T_eff_prime", "newPrice",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["newPrice"], "104.95");
        assert_eq!(json["T_long"], 50_000);
    }
}
