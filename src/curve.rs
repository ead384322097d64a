// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Curve Generation
//
// One formula family drives every chart in the app: a linear trend, a
// sine oscillation and per-sample noise, all drawn from the seeded stream
// at fixed indices. Preview (20-sample) and detail (100-sample) charts are
// generated from the same parameters but are NOT prefixes of one another;
// the divergence is a documented property of the design, not a bug.

use serde::{Deserialize, Serialize};

use crate::stream::stream_value;

// ─── Tuning presets ──────────────────────────────────────────────────────────

// Swing size in sentiment points (15-50 keeps charts lively without pinning
// at the clamp rails).
const VOLATILITY_BASE: f64 = 15.0;
const VOLATILITY_SPAN: f64 = 35.0;

// Trend strength 0-18 over the whole series.
const TREND_STRENGTH_SPAN: f64 = 18.0;

// 3-8 peaks/valleys across the series.
const PEAKS_BASE: f64 = 3.0;
const PEAKS_SPAN: f64 = 5.0;

// Series starts in the 40-60 band.
const START_BASE: f64 = 40.0;
const START_SPAN: f64 = 20.0;

const NOISE_SCALE: f64 = 5.0;

const SENTIMENT_MIN: f64 = 0.0;
const SENTIMENT_MAX: f64 = 100.0;

// ─── Stream layout ───────────────────────────────────────────────────────────

// Curve parameters live at indices 0-4; per-sample draws are offset so the
// parameter block is never re-read as sample data.
const IDX_VOLATILITY: u32 = 0;
const IDX_TREND_DIRECTION: u32 = 1;
const IDX_TREND_STRENGTH: u32 = 2;
const IDX_PEAKS: u32 = 3;
const IDX_START: u32 = 4;

const OSCILLATION_OFFSET: u32 = 5;
const NOISE_OFFSET: u32 = 100;

const TRADE_PRICE_OFFSET: u32 = 7000;
const TRADE_VOLUME_OFFSET: u32 = 8000;

const TRADE_PRICE_SPAN: f64 = 10.0;
const TRADE_VOLUME_SPAN: f64 = 10_000.0;
const TRADE_VOLUME_FLOOR: u64 = 1_000;

// ─── CurveParams ─────────────────────────────────────────────────────────────

/// Chart characteristics derived from the seeded stream at fixed indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Oscillation amplitude in sentiment points (15-50).
    pub volatility: f64,
    /// +1.0 for an up-trending series, -1.0 for down.
    pub trend_direction: f64,
    /// Total drift over the series (0-18).
    pub trend_strength: f64,
    /// Number of sine peaks/valleys (3-8).
    pub num_peaks: u32,
    /// First sample's trend baseline (40-60).
    pub start_y: f64,
}

impl CurveParams {
    /// Derive the parameter set for `seed` from stream indices 0-4.
    pub fn derive(seed: u32) -> Self {
        Self {
            volatility: VOLATILITY_BASE + stream_value(seed, IDX_VOLATILITY) * VOLATILITY_SPAN,
            trend_direction: if stream_value(seed, IDX_TREND_DIRECTION) > 0.5 {
                1.0
            } else {
                -1.0
            },
            trend_strength: stream_value(seed, IDX_TREND_STRENGTH) * TREND_STRENGTH_SPAN,
            num_peaks: (PEAKS_BASE + stream_value(seed, IDX_PEAKS) * PEAKS_SPAN) as u32,
            start_y: START_BASE + stream_value(seed, IDX_START) * START_SPAN,
        }
    }
}

// ─── Curve family ────────────────────────────────────────────────────────────

/// Trend + oscillation + noise for sample `index` of a `samples`-long series.
fn compose_sample(params: &CurveParams, seed: u32, index: usize, samples: usize) -> f64 {
    let progress = if samples > 1 {
        index as f64 / (samples - 1) as f64
    } else {
        0.0
    };
    let base = params.start_y + params.trend_direction * params.trend_strength * progress;
    let oscillation = (progress * std::f64::consts::PI * params.num_peaks as f64).sin()
        * params.volatility
        * stream_value(seed, OSCILLATION_OFFSET + index as u32);
    let noise = (stream_value(seed, NOISE_OFFSET + index as u32) - 0.5) * NOISE_SCALE;
    base + oscillation + noise
}

/// Sentiment series clamped to [0, 100].
pub fn sentiment_curve(seed: u32, samples: usize) -> Vec<f64> {
    let params = CurveParams::derive(seed);
    (0..samples)
        .map(|i| compose_sample(&params, seed, i, samples).clamp(SENTIMENT_MIN, SENTIMENT_MAX))
        .collect()
}

/// Same composition without the sentiment clamp, for raw price/volume
/// shaping where the 0-100 band does not apply.
pub fn raw_curve(seed: u32, samples: usize) -> Vec<f64> {
    let params = CurveParams::derive(seed);
    (0..samples)
        .map(|i| compose_sample(&params, seed, i, samples))
        .collect()
}

/// Fill prices around `base_price` for an entity's trading history.
pub fn price_series(seed: u32, samples: usize, base_price: f64) -> Vec<f64> {
    (0..samples)
        .map(|i| {
            base_price
                + (stream_value(seed, TRADE_PRICE_OFFSET + i as u32) - 0.5) * TRADE_PRICE_SPAN
        })
        .collect()
}

/// Fill volumes for an entity's trading history.
pub fn volume_series(seed: u32, samples: usize) -> Vec<u64> {
    (0..samples)
        .map(|i| {
            (stream_value(seed, TRADE_VOLUME_OFFSET + i as u32) * TRADE_VOLUME_SPAN) as u64
                + TRADE_VOLUME_FLOOR
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
