// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Entity Aggregation
//
// Composes identity, baselines and curves into the record a screen renders.
// Every numeric field flows from the entity seed, so the list page, the
// detail page and anything else asking about the same (category, rank)
// agree byte-for-byte. There is no cache and nothing persists: each call
// is a fresh derivation.

use crate::baseline;
use crate::curve;
use crate::identity;
use crate::money;
use crate::stream::{entity_seed, stream_value};
use crate::types::{ChartResolution, EngagementStat, EntityDetail, EntityRecord, TradeFill, TradeSide};

// ─── Stream layout ───────────────────────────────────────────────────────────

const IDX_PRICE_JITTER: u32 = 2000;
const IDX_SESSION_FLAG: u32 = 4000;

const LIKES_OFFSET: u32 = 5000;
const SHARES_OFFSET: u32 = 6000;
const TRADE_SIDE_OFFSET: u32 = 9000;

const PRICE_JITTER_SPAN: f64 = 2.0;

const LIKES_SPAN: f64 = 1_000.0;
const SHARES_SPAN: f64 = 100.0;

/// Sentiment-delta → price-change-percent scale.
const CHANGE_SCALE: f64 = 10.0;

const MARKET_CAP_MULTIPLIER: f64 = 1_000_000.0;

const TRADE_HISTORY_LEN: usize = 50;
const ENGAGEMENT_LEN: usize = 15;

// ─── Builders ────────────────────────────────────────────────────────────────

/// Build the record for `(category, rank)` at the requested resolution.
///
/// Out-of-range ranks clamp into `[1, 50]`; unknown categories synthesize
/// generic identities. This never fails.
pub fn get_entity(category: &str, rank: u32, resolution: ChartResolution) -> EntityRecord {
    let rank = baseline::sanitize_rank(rank);
    let seed = entity_seed(category, rank);

    let price = seeded_price(seed, rank);
    let curve = curve::sentiment_curve(seed, resolution.samples());
    let (change, change_percent) = change_from_curve(&curve, price);

    EntityRecord {
        id: rank,
        name: identity::display_name(category, rank),
        ticker: identity::entity_ticker(category, rank),
        category: category.to_string(),
        rank,
        price,
        change,
        change_percent,
        sentiment: baseline::base_sentiment(rank),
        volume: baseline::base_volume(seed),
        market_cap: (price * MARKET_CAP_MULTIPLIER) as u64,
        curve,
        is_24h: stream_value(seed, IDX_SESSION_FLAG) > 0.5,
    }
}

/// Build the full detail-page payload: the 100-sample record plus the
/// seeded trading history and engagement counts.
pub fn get_entity_detail(category: &str, rank: u32) -> EntityDetail {
    let record = get_entity(category, rank, ChartResolution::Detail);
    let seed = entity_seed(category, record.rank);
    EntityDetail {
        trading_history: trading_history(seed, record.price),
        engagement: engagement(seed),
        record,
    }
}

/// Screen-supplied entity ids are strings; parse defensively and render
/// rank 1 when the id is garbage.
pub fn entity_by_id(entity_id: &str, category: &str, resolution: ChartResolution) -> EntityRecord {
    get_entity(category, baseline::parse_entity_id(entity_id), resolution)
}

// ─── Seeded fields ───────────────────────────────────────────────────────────

/// Rank baseline plus the seeded sub-dollar variation, floored and rounded
/// to cents. Uses the stream (index 2000), NOT a platform RNG: the same
/// entity shows the same cents on every screen.
fn seeded_price(seed: u32, rank: u32) -> f64 {
    let raw = baseline::base_price(rank)
        + (stream_value(seed, IDX_PRICE_JITTER) - 0.5) * PRICE_JITTER_SPAN;
    money::round_cents(raw.max(baseline::PRICE_FLOOR))
}

/// Daily change implied by the delivered curve's endpoints. Derived, never
/// drawn independently, so the badge always agrees with the chart trend.
fn change_from_curve(curve: &[f64], price: f64) -> (f64, f64) {
    let (first, last) = match (curve.first(), curve.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return (0.0, 0.0),
    };
    let change_percent = money::round_cents((last - first) / 100.0 * CHANGE_SCALE);
    let change = money::round_cents(price * change_percent / 100.0);
    (change, change_percent)
}

fn trading_history(seed: u32, price: f64) -> Vec<TradeFill> {
    let prices = curve::price_series(seed, TRADE_HISTORY_LEN, price);
    let volumes = curve::volume_series(seed, TRADE_HISTORY_LEN);
    prices
        .into_iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (fill_price, volume))| TradeFill {
            price: money::round_cents(fill_price),
            volume,
            side: if (stream_value(seed, TRADE_SIDE_OFFSET + i as u32) * 2.0) as u32 == 0 {
                TradeSide::Buy
            } else {
                TradeSide::Sell
            },
        })
        .collect()
}

fn engagement(seed: u32) -> Vec<EngagementStat> {
    (0..ENGAGEMENT_LEN)
        .map(|i| EngagementStat {
            likes: (stream_value(seed, LIKES_OFFSET + i as u32) * LIKES_SPAN) as u64,
            shares: (stream_value(seed, SHARES_OFFSET + i as u32) * SHARES_SPAN) as u64,
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
