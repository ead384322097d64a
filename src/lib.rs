// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange")

pub mod baseline;
pub mod curve;
pub mod entity;
pub mod exchange;
pub mod identity;
pub mod leaderboard;
pub mod money;
pub mod stream;
pub mod types;
pub mod voro;

pub use exchange::VoroExchange;
pub use types::*;
pub use voro::{MarketState, PriceBreakdown, SimulateReport};

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl VoroExchange {
    /// Open the exchange. The four `unit` values jitter the simulate
    /// screen's market state around its defaults; pass `Math.random()`
    /// from the page, or 0.5s for the exact default state. Entity data
    /// is unaffected: it derives from seeds, not from this state.
    #[wasm_bindgen(constructor)]
    pub fn new(u_long: f64, u_short: f64, u_buy: f64, u_sell: f64) -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Self::with_state(MarketState::with_jitter(u_long, u_short, u_buy, u_sell))
    }

    /// One entity at preview resolution (list rows, spotlight cards).
    pub fn get_entity(&self, category: &str, rank: u32) -> JsValue {
        to_js(&self.entity_core(category, rank, ChartResolution::Preview))
    }

    /// Full detail-page payload: 100-sample chart, trading history,
    /// engagement counts.
    pub fn get_entity_detail(&self, category: &str, rank: u32) -> JsValue {
        to_js(&self.entity_detail_core(category, rank))
    }

    /// Detail record addressed by the route's string id; bad ids render
    /// rank 1 instead of failing.
    pub fn get_entity_by_id(&self, entity_id: &str, category: &str) -> JsValue {
        to_js(&self.entity_by_id_core(entity_id, category))
    }

    /// All 50 rows of a category list screen.
    pub fn category_board(&self, category: &str) -> JsValue {
        to_js(&self.category_board_core(category))
    }

    /// The simulate screen payload for the current market state.
    pub fn simulate(&self) -> JsValue {
        to_js(&self.simulate_core())
    }

    /// Season competition standings.
    pub fn season_standings(&self, season: &str) -> JsValue {
        to_js(&self.standings_core(season))
    }

    /// Categories the home screen can offer.
    pub fn categories(&self) -> JsValue {
        to_js(&identity::known_categories())
    }

    pub fn set_flow_volumes(&mut self, buy: f64, sell: f64) {
        self.market.buy_volume = buy.max(0.0);
        self.market.sell_volume = sell.max(0.0);
    }

    pub fn set_token_positions(&mut self, long: f64, short: f64) {
        self.market.long_tokens = long.max(0.0);
        self.market.short_tokens = short.max(0.0);
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}
