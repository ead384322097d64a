// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Season Leaderboard

use serde::{Deserialize, Serialize};

use crate::money;
use crate::stream::{entity_seed, stream_value};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const STANDINGS_LEN: u32 = 50;

/// Rank 1 holds about this many season tokens.
const TOKENS_CEILING: f64 = 2_000.0;
const TOKENS_STEP: f64 = 25.0;
const TOKENS_FLOOR: f64 = 100.0;
const TOKENS_JITTER_SPAN: f64 = 100.0;

/// Daily change spread: -5% to +5%.
const CHANGE_SPAN: f64 = 10.0;

const IDX_TOKENS_JITTER: u32 = 0;
const IDX_CHANGE: u32 = 1;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of the season competition board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub season_tokens: f64,
    pub change: f64,
    pub change_percent: f64,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Top-50 standings for a season label (e.g. `"Q4-2025"`).
///
/// Seeded per `(season, rank)`, so every visit to the competition screen
/// shows the same board for the same season. Token totals trend down with
/// rank but the jitter spread (±50) exceeds the 25-token rank step, so
/// neighboring rows can swap order.
pub fn season_standings(season: &str) -> Vec<LeaderboardEntry> {
    (1..=STANDINGS_LEN).map(|rank| standing(season, rank)).collect()
}

fn standing(season: &str, rank: u32) -> LeaderboardEntry {
    let seed = entity_seed(season, rank);
    let tokens = (TOKENS_CEILING - (rank - 1) as f64 * TOKENS_STEP
        + (stream_value(seed, IDX_TOKENS_JITTER) - 0.5) * TOKENS_JITTER_SPAN)
        .max(TOKENS_FLOOR);
    let change_percent = (stream_value(seed, IDX_CHANGE) - 0.5) * CHANGE_SPAN;
    let change = tokens * change_percent / 100.0;

    LeaderboardEntry {
        rank,
        username: format!("Trader{:03}", rank),
        season_tokens: money::round_cents(tokens),
        change: money::round_cents(change),
        change_percent: money::round_cents(change_percent),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
