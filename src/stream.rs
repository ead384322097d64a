// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Voro Synthetic Market Suite ("The Mock Exchange") - Seeded Stream

/// Scale factor applied to the sine output before taking the fractional part.
const SIN_SCALE: f64 = 10_000.0;

/// Spacing between consecutive call indices in sine space.
const INDEX_STEP: f64 = 0.1;

/// Produce the `index`-th value of the stream for `seed`, in `[0, 1)`.
///
/// `frac(sin(seed + index * 0.1) * 10000)`. Stateless: two call sites that
/// agree on `(seed, index)` reproduce the same value without sharing an RNG
/// object. Low statistical quality; never use for anything that settles
/// value. Outputs feed display charts only.
pub fn stream_value(seed: u32, index: u32) -> f64 {
    let x = (seed as f64 + index as f64 * INDEX_STEP).sin() * SIN_SCALE;
    x - x.floor()
}

/// Derive the stream seed for an entity: rank plus the sum of the
/// category's UTF-16 code units.
///
/// Collisions between categories with equal code-unit sums are tolerated;
/// only within-entity reproducibility matters.
pub fn entity_seed(category: &str, rank: u32) -> u32 {
    let code_sum: u32 = category.encode_utf16().map(u32::from).sum();
    rank.wrapping_add(code_sum)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_unit_interval() {
        for seed in [0u32, 1, 1242, 987_654] {
            for index in 0..500 {
                let v = stream_value(seed, index);
                assert!((0.0..1.0).contains(&v), "seed={} index={} v={}", seed, index, v);
            }
        }
    }

    #[test]
    fn test_stateless_reproduction() {
        // Two independent call orders must agree on every (seed, index) pair.
        let forward: Vec<f64> = (0..200).map(|i| stream_value(1242, i)).collect();
        let backward: Vec<f64> = (0..200).rev().map(|i| stream_value(1242, i)).collect();
        for (i, v) in forward.iter().enumerate() {
            assert_eq!(*v, backward[199 - i]);
        }
    }

    #[test]
    fn test_seed_is_rank_plus_code_sum() {
        // "Male Athletes" UTF-16 code units sum to 1241.
        assert_eq!(entity_seed("Male Athletes", 1), 1242);
        assert_eq!(entity_seed("Male Athletes", 50), 1291);
        assert_eq!(entity_seed("", 7), 7);
    }

    #[test]
    fn test_seed_handles_non_ascii() {
        // "é" is a single UTF-16 unit (0x00E9 = 233).
        assert_eq!(entity_seed("é", 1), 234);
    }

    #[test]
    fn test_distinct_indices_vary() {
        let a = stream_value(1242, 0);
        let b = stream_value(1242, 1);
        assert_ne!(a, b);
    }
}
