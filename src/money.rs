// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Money Helpers

//! f64 ↔ Decimal conversion for cent rounding and wire formatting.
//!
//! Chart math stays in f64; anything shown as money crosses through
//! `Decimal` so rounding is exact and half-cents round away from zero.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert f64 to Decimal (lossy but sufficient for display values).
pub fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or(Decimal::ZERO)
}

/// Convert Decimal to f64.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Round to whole cents, midpoints away from zero.
pub fn round_cents(v: f64) -> f64 {
    from_decimal(to_decimal(v).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Fixed-decimal string rendering for wire payloads.
pub fn format_fixed(v: f64, places: u32) -> String {
    let d = to_decimal(v).round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.prec$}", d, prec = places as usize)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(399.995), 400.0);
        assert_eq!(round_cents(399.994), 399.99);
        assert_eq!(round_cents(-1.005), -1.01);
        assert_eq!(round_cents(20.0), 20.0);
    }

    #[test]
    fn test_format_fixed_pads_zeros() {
        assert_eq!(format_fixed(0.2, 3), "0.200");
        assert_eq!(format_fixed(104.9459, 2), "104.95");
        assert_eq!(format_fixed(27_500.0, 2), "27500.00");
        assert_eq!(format_fixed(-0.5, 3), "-0.500");
    }

    #[test]
    fn test_decimal_roundtrip() {
        assert_eq!(to_decimal(1.5), dec!(1.5));
        assert_eq!(from_decimal(dec!(123.45)), 123.45);
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    }
}
