// Deterministic sweep: re-derives every entity in the catalog twice and
// cross-checks the invariants every screen depends on.

use voro_engine::baseline;
use voro_engine::entity;
use voro_engine::identity;
use voro_engine::types::ChartResolution;

use crate::report::CheckOutcome;

/// Categories covered by the sweep: the full catalog plus one unknown
/// category to exercise the fallback path.
fn sweep_categories() -> Vec<&'static str> {
    let mut categories = identity::known_categories();
    categories.push("Uncatalogued Things");
    categories
}

/// Every field of every record must survive an independent re-derivation.
pub fn check_determinism() -> CheckOutcome {
    let mut checked = 0u64;
    for category in sweep_categories() {
        for rank in 1..=baseline::MAX_RANK {
            let preview_a = entity::get_entity(category, rank, ChartResolution::Preview);
            let preview_b = entity::get_entity(category, rank, ChartResolution::Preview);
            let detail_a = entity::get_entity_detail(category, rank);
            let detail_b = entity::get_entity_detail(category, rank);
            checked += 2;
            if preview_a != preview_b || detail_a != detail_b {
                return CheckOutcome::fail(
                    "determinism",
                    checked,
                    format!("{} rank {} drifted between derivations", category, rank),
                );
            }
            if preview_a.name != detail_a.record.name
                || preview_a.ticker != detail_a.record.ticker
                || preview_a.price != detail_a.record.price
            {
                return CheckOutcome::fail(
                    "determinism",
                    checked,
                    format!("{} rank {} disagrees across resolutions", category, rank),
                );
            }
        }
    }
    CheckOutcome::pass("determinism", checked, "all derivations byte-identical".into())
}

/// Sentiment curves stay inside [0, 100] at both resolutions.
pub fn check_curve_bounds() -> CheckOutcome {
    let mut checked = 0u64;
    for category in sweep_categories() {
        for rank in 1..=baseline::MAX_RANK {
            let detail = entity::get_entity(category, rank, ChartResolution::Detail);
            for sample in &detail.curve {
                checked += 1;
                if !(0.0..=100.0).contains(sample) {
                    return CheckOutcome::fail(
                        "curve-bounds",
                        checked,
                        format!("{} rank {} sample {}", category, rank, sample),
                    );
                }
            }
        }
    }
    CheckOutcome::pass("curve-bounds", checked, "all samples in [0, 100]".into())
}

/// Baseline prices never increase with rank and never drop below the floor.
pub fn check_baseline_monotonic() -> CheckOutcome {
    let mut checked = 0u64;
    for rank in 1..baseline::MAX_RANK {
        checked += 1;
        if baseline::base_price(rank) < baseline::base_price(rank + 1) {
            return CheckOutcome::fail(
                "baseline-monotonic",
                checked,
                format!("rank {} prices out of order", rank),
            );
        }
    }
    for rank in 1..=baseline::MAX_RANK {
        checked += 1;
        if baseline::base_price(rank) < baseline::PRICE_FLOOR {
            return CheckOutcome::fail(
                "baseline-monotonic",
                checked,
                format!("rank {} below floor", rank),
            );
        }
    }
    CheckOutcome::pass("baseline-monotonic", checked, "ladder ordered and floored".into())
}

/// Roster-derived tickers are always exactly 4 uppercase ASCII letters.
pub fn check_ticker_wellformed() -> CheckOutcome {
    let mut checked = 0u64;
    for category in identity::known_categories() {
        for rank in 1..=baseline::MAX_RANK {
            if let Some(name) = identity::canonical_name(category, rank) {
                let ticker = identity::ticker_symbol(name);
                checked += 1;
                if ticker.len() != 4 || !ticker.chars().all(|c| c.is_ascii_uppercase()) {
                    return CheckOutcome::fail(
                        "ticker-wellformed",
                        checked,
                        format!("{:?} -> {:?}", name, ticker),
                    );
                }
            }
        }
    }
    CheckOutcome::pass("ticker-wellformed", checked, "all symbols 4 uppercase letters".into())
}

/// The change badge always agrees with the delivered curve's endpoints.
pub fn check_change_consistency() -> CheckOutcome {
    let mut checked = 0u64;
    for category in sweep_categories() {
        for rank in 1..=baseline::MAX_RANK {
            let record = entity::get_entity(category, rank, ChartResolution::Detail);
            let first = record.curve[0];
            let last = *record.curve.last().unwrap();
            checked += 1;
            // Rounded to two decimals, so only gross sign disagreement counts.
            if (last - first) > 1.0 && record.change_percent < 0.0
                || (last - first) < -1.0 && record.change_percent > 0.0
            {
                return CheckOutcome::fail(
                    "change-consistency",
                    checked,
                    format!(
                        "{} rank {}: curve moved {:.2} but change {}%",
                        category,
                        rank,
                        last - first,
                        record.change_percent
                    ),
                );
            }
        }
    }
    CheckOutcome::pass("change-consistency", checked, "badges track curve trend".into())
}
