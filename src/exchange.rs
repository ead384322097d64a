// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Exchange Facade

use wasm_bindgen::prelude::*;

use crate::baseline;
use crate::entity;
use crate::leaderboard::{self, LeaderboardEntry};
use crate::types::{ChartResolution, EntityDetail, EntityRecord};
use crate::voro::{MarketState, SimulateReport};

// ─── VoroExchange ────────────────────────────────────────────────────────────

/// The one object the UI talks to.
///
/// Entity queries are pure pass-throughs into the seeded generators; the
/// only state carried here is the explicit [`MarketState`] behind the
/// simulate screen, owned by the caller rather than by module-level
/// globals.
#[wasm_bindgen]
pub struct VoroExchange {
    pub(crate) market: MarketState,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl VoroExchange {
    /// Build an exchange around an explicit market state.
    pub fn with_state(market: MarketState) -> Self {
        Self {
            market: market.sanitized(),
        }
    }

    pub fn entity_core(
        &self,
        category: &str,
        rank: u32,
        resolution: ChartResolution,
    ) -> EntityRecord {
        entity::get_entity(category, rank, resolution)
    }

    pub fn entity_detail_core(&self, category: &str, rank: u32) -> EntityDetail {
        entity::get_entity_detail(category, rank)
    }

    pub fn entity_by_id_core(&self, entity_id: &str, category: &str) -> EntityRecord {
        entity::entity_by_id(entity_id, category, ChartResolution::Detail)
    }

    /// All 50 rows of a category list screen, preview resolution.
    pub fn category_board_core(&self, category: &str) -> Vec<EntityRecord> {
        (1..=baseline::MAX_RANK)
            .map(|rank| entity::get_entity(category, rank, ChartResolution::Preview))
            .collect()
    }

    pub fn simulate_core(&self) -> SimulateReport {
        SimulateReport::from_state(&self.market)
    }

    pub fn standings_core(&self, season: &str) -> Vec<LeaderboardEntry> {
        leaderboard::season_standings(season)
    }

    pub fn market_state(&self) -> MarketState {
        self.market
    }
}

impl Default for VoroExchange {
    fn default() -> Self {
        Self::with_state(MarketState::default())
    }
}
