#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use voro_engine::VoroExchange;

#[wasm_bindgen_test]
fn exchange_serializes_across_the_boundary() {
    let exchange = VoroExchange::new(0.5, 0.5, 0.5, 0.5);
    assert!(!exchange.simulate().is_null());
    assert!(!exchange.get_entity("Male Athletes", 1).is_null());
    assert!(!exchange.category_board("Cities").is_null());
}
