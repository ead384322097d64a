// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Rank Baselines

use crate::stream::stream_value;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Rank 1 entities list at this price.
const LAUNCH_PRICE: f64 = 400.0;
/// Price drop per rank step, chosen so rank 50 lands near the floor.
const PRICE_STEP: f64 = 7.6;
/// No entity trades below this.
pub const PRICE_FLOOR: f64 = 20.0;

const SENTIMENT_CEILING: f64 = 100.0;
const SENTIMENT_STEP: f64 = 1.5;

const VOLUME_STREAM_INDEX: u32 = 3000;
const VOLUME_SPAN: f64 = 100_000.0;
const VOLUME_FLOOR: u64 = 10_000;

pub const MAX_RANK: u32 = 50;
pub const DEFAULT_RANK: u32 = 1;

// ---------------------------------------------------------------------------
// Baselines
// ---------------------------------------------------------------------------

/// Baseline USD price before curve effects. Monotonically non-increasing
/// in rank, clamped to [`PRICE_FLOOR`].
pub fn base_price(rank: u32) -> f64 {
    let rank = sanitize_rank(rank);
    (LAUNCH_PRICE - (rank - 1) as f64 * PRICE_STEP).max(PRICE_FLOOR)
}

/// Baseline sentiment score in [0, 100]. Rank 1 is 100, each rank loses 1.5.
pub fn base_sentiment(rank: u32) -> f64 {
    let rank = sanitize_rank(rank);
    (SENTIMENT_CEILING - (rank - 1) as f64 * SENTIMENT_STEP).clamp(0.0, SENTIMENT_CEILING)
}

/// Baseline daily volume, drawn from the seeded stream at a fixed index.
pub fn base_volume(seed: u32) -> u64 {
    (stream_value(seed, VOLUME_STREAM_INDEX) * VOLUME_SPAN) as u64 + VOLUME_FLOOR
}

/// Cosmetic cent variation of up to ±1 USD around `price`.
///
/// `unit` is a caller-supplied value in [0, 1) from an UNSEEDED source.
/// Display-layer only: the seeded entity path must never route through
/// this, or reproducibility across screens breaks.
pub fn cents_jitter(price: f64, unit: f64) -> f64 {
    (price + (unit - 0.5) * 2.0).max(PRICE_FLOOR)
}

// ---------------------------------------------------------------------------
// Input sanitizing
// ---------------------------------------------------------------------------

/// Clamp any rank into `[1, MAX_RANK]`.
pub fn sanitize_rank(rank: u32) -> u32 {
    rank.clamp(1, MAX_RANK)
}

/// Parse a screen-supplied entity id into a rank.
///
/// Takes leading ASCII digits only; anything unparseable falls back to
/// rank 1 so the UI always has something to render.
pub fn parse_entity_id(id: &str) -> u32 {
    let digits: String = id
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let rank = digits
        .parse::<u64>()
        .map(|v| v.min(MAX_RANK as u64) as u32)
        .unwrap_or(DEFAULT_RANK);
    sanitize_rank(rank)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_monotone_non_increasing() {
        for rank in 1..MAX_RANK {
            assert!(
                base_price(rank) >= base_price(rank + 1),
                "rank {} price below rank {}",
                rank,
                rank + 1
            );
        }
    }

    #[test]
    fn test_price_floor_holds() {
        for rank in 1..=MAX_RANK {
            assert!(base_price(rank) >= PRICE_FLOOR);
        }
        assert!((base_price(1) - 400.0).abs() < f64::EPSILON);
        assert!((base_price(2) - 392.4).abs() < 1e-9);
    }

    #[test]
    fn test_sentiment_bounds() {
        assert!((base_sentiment(1) - 100.0).abs() < f64::EPSILON);
        for rank in 1..=MAX_RANK {
            let s = base_sentiment(rank);
            assert!((0.0..=100.0).contains(&s));
        }
        // Rank 50: 100 - 49 * 1.5 = 26.5.
        assert!((base_sentiment(50) - 26.5).abs() < 1e-9);
    }

    #[test]
    fn test_volume_floor_and_determinism() {
        let v = base_volume(1242);
        assert!(v >= VOLUME_FLOOR);
        assert!(v < VOLUME_FLOOR + VOLUME_SPAN as u64 + 1);
        assert_eq!(v, base_volume(1242));
    }

    #[test]
    fn test_cents_jitter_stays_above_floor() {
        assert!((cents_jitter(400.0, 0.0) - 399.0).abs() < 1e-9);
        assert!((cents_jitter(400.0, 0.999) - 400.998).abs() < 1e-9);
        assert!(cents_jitter(20.0, 0.0) >= PRICE_FLOOR);
    }

    #[test]
    fn test_rank_sanitizing() {
        assert_eq!(sanitize_rank(0), 1);
        assert_eq!(sanitize_rank(1), 1);
        assert_eq!(sanitize_rank(50), 50);
        assert_eq!(sanitize_rank(51), 50);
        assert_eq!(sanitize_rank(u32::MAX), 50);
    }

    #[test]
    fn test_entity_id_parsing() {
        assert_eq!(parse_entity_id("7"), 7);
        assert_eq!(parse_entity_id("  12  "), 12);
        assert_eq!(parse_entity_id("12abc"), 12);
        assert_eq!(parse_entity_id("abc"), 1);
        assert_eq!(parse_entity_id(""), 1);
        assert_eq!(parse_entity_id("0"), 1);
        assert_eq!(parse_entity_id("999999999999999999999"), 50);
    }
}
