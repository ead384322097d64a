#[cfg(test)]
mod tests {
    use voro_engine::types::ChartResolution;
    use voro_engine::voro::{self, MarketState};
    use voro_engine::VoroExchange;

    // ========== Reproducibility Across Screens ==========

    #[test]
    fn test_category_list_and_detail_page_agree() {
        // The category list screen and the entity detail screen build
        // their own exchange instances; the derived identity must match.
        let list_screen = VoroExchange::default();
        let detail_screen = VoroExchange::default();

        let board = list_screen.category_board_core("Male Athletes");
        let row = &board[0];
        let detail = detail_screen.entity_detail_core("Male Athletes", 1);

        assert_eq!(row.name, detail.record.name);
        assert_eq!(row.ticker, detail.record.ticker);
        assert_eq!(row.price, detail.record.price);
        assert_eq!(row.sentiment, detail.record.sentiment);
        assert_eq!(row.volume, detail.record.volume);
        assert_eq!(row.market_cap, detail.record.market_cap);

        // The two screens legitimately request different curve lengths.
        assert_eq!(row.curve.len(), 20);
        assert_eq!(detail.record.curve.len(), 100);
    }

    #[test]
    fn test_full_board_is_reproducible() {
        let a = VoroExchange::default();
        let b = VoroExchange::default();
        for category in ["Male Athletes", "Cities", "Crypto", "Unknown Things"] {
            assert_eq!(a.category_board_core(category), b.category_board_core(category));
        }
    }

    #[test]
    fn test_board_prices_decrease_with_rank() {
        let exchange = VoroExchange::default();
        let board = exchange.category_board_core("Tech Companies");
        assert_eq!(board.len(), 50);
        for pair in board.windows(2) {
            // Baselines step by 7.6; the seeded cent variation is under
            // ±1, so ordering survives it.
            assert!(
                pair[0].price >= pair[1].price - 2.0,
                "rank {} ${} vs rank {} ${}",
                pair[0].rank,
                pair[0].price,
                pair[1].rank,
                pair[1].price
            );
        }
    }

    // ========== Fallback Behavior ==========

    #[test]
    fn test_unknown_category_renders() {
        let exchange = VoroExchange::default();
        let entity = exchange.entity_core("Quantum Llamas", 7, ChartResolution::Preview);
        assert_eq!(entity.name, "Quantum Llamas #7");
        assert_eq!(entity.ticker, "CAT7");
        assert!(entity.price >= 20.0);
    }

    #[test]
    fn test_garbage_entity_id_renders_rank_one() {
        let exchange = VoroExchange::default();
        let fallback = exchange.entity_by_id_core("not-a-number", "Movies");
        let rank_one = exchange.entity_core("Movies", 1, ChartResolution::Detail);
        assert_eq!(fallback, rank_one);
    }

    // ========== Simulate Endpoint ==========

    #[test]
    fn test_simulate_default_state() {
        let exchange = VoroExchange::default();
        let report = exchange.simulate_core();
        assert_eq!(report.long_tokens, 50_000);
        assert_eq!(report.short_tokens, 30_000);
        assert_eq!(report.flow_ratio, "0.200");
        assert_eq!(report.effective_tokens, "27500.00");
        assert_eq!(report.new_price, "104.95");
    }

    #[test]
    fn test_simulate_json_contract() {
        let exchange = VoroExchange::default();
        let json = serde_json::to_value(exchange.simulate_core()).unwrap();
        for key in [
            "P0", "L_global", "T_long", "T_short", "B_H", "S_H", "f", "T_eff",
            "T_eff_prime", "newPrice",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_price_band_survives_hostile_positions() {
        let hi = voro::LISTING_PRICE * (1.0 + voro::AMPLITUDE);
        let lo = voro::LISTING_PRICE * (1.0 - voro::AMPLITUDE);

        let squeeze = VoroExchange::with_state(MarketState {
            long_tokens: 1e18,
            short_tokens: 0.0,
            buy_volume: 1e15,
            sell_volume: 0.0,
        });
        let price: f64 = squeeze.simulate_core().new_price.parse().unwrap();
        assert!(price <= hi, "price {} above band", price);

        let dump = VoroExchange::with_state(MarketState {
            long_tokens: 0.0,
            short_tokens: 1e18,
            buy_volume: 0.0,
            sell_volume: 1e15,
        });
        let price: f64 = dump.simulate_core().new_price.parse().unwrap();
        assert!(price >= lo, "price {} below band", price);
    }

    #[test]
    fn test_market_state_is_caller_owned() {
        // Two exchanges with different jitter disagree on simulate output
        // but still agree on every entity field.
        let a = VoroExchange::with_state(MarketState::with_jitter(0.1, 0.9, 0.2, 0.8));
        let b = VoroExchange::with_state(MarketState::with_jitter(0.9, 0.1, 0.8, 0.2));
        assert_ne!(a.simulate_core(), b.simulate_core());
        assert_eq!(
            a.entity_core("Startups", 1, ChartResolution::Detail),
            b.entity_core("Startups", 1, ChartResolution::Detail)
        );
    }

    // ========== Leaderboard ==========

    #[test]
    fn test_standings_stable_per_season() {
        let exchange = VoroExchange::default();
        let first_visit = exchange.standings_core("Q4-2025");
        let second_visit = exchange.standings_core("Q4-2025");
        assert_eq!(first_visit, second_visit);
        assert_eq!(first_visit.len(), 50);
    }
}
