// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Type Definitions

use serde::{Deserialize, Serialize};

// ─── Chart Resolution ────────────────────────────────────────────────────────

/// Sample count requested by a screen: list rows render the short preview
/// sparkline, the entity page renders the full-width chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChartResolution {
    Preview,
    Detail,
}

impl Default for ChartResolution {
    fn default() -> Self {
        ChartResolution::Preview
    }
}

impl ChartResolution {
    pub fn samples(&self) -> usize {
        match self {
            Self::Preview => 20,
            Self::Detail => 100,
        }
    }
}

// ─── Trade Side ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TradeSide {
    Buy = 0,
    Sell = 1,
}

// ─── EntityRecord ────────────────────────────────────────────────────────────

/// One tradeable entity as every screen sees it.
///
/// Every field except the `curve` length is derived purely from
/// `(category, rank)`; repeated derivations are byte-identical no matter
/// which screen asks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,
    pub ticker: String,
    pub category: String,
    pub rank: u32,
    /// Last price in USD, rounded to whole cents.
    pub price: f64,
    /// Dollar move implied by the curve endpoints.
    pub change: f64,
    pub change_percent: f64,
    /// Sentiment score in [0, 100].
    pub sentiment: f64,
    pub volume: u64,
    pub market_cap: u64,
    /// Sentiment curve at the requested [`ChartResolution`].
    pub curve: Vec<f64>,
    #[serde(default)]
    pub is_24h: bool,
}

// ─── TradeFill ───────────────────────────────────────────────────────────────

/// One synthetic fill in an entity's recent trading history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeFill {
    pub price: f64,
    pub volume: u64,
    pub side: TradeSide,
}

// ─── EngagementStat ──────────────────────────────────────────────────────────

/// Seeded like/share counts for one social feed slot. The post copy itself
/// lives in the UI layer; only the numbers come from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStat {
    pub likes: u64,
    pub shares: u64,
}

// ─── EntityDetail ────────────────────────────────────────────────────────────

/// Full entity page payload: the record at detail resolution plus the
/// seeded history feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetail {
    pub record: EntityRecord,
    pub trading_history: Vec<TradeFill>,
    pub engagement: Vec<EngagementStat>,
}
