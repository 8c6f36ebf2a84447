//! Benchmarks for order validation and payload construction.
//!
//! Run with: cargo bench --bench payload_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use futures_order_bot::domain::order::{OrderInput, OrderRequest};
use futures_order_bot::domain::payload::OrderPayload;

fn input(order_type: &str, price: Option<&str>, stop_price: Option<&str>) -> OrderInput {
    OrderInput {
        symbol: "BTCUSDT".to_string(),
        side: "BUY".to_string(),
        order_type: order_type.to_string(),
        quantity: "0.010".to_string(),
        price: price.map(String::from),
        stop_price: stop_price.map(String::from),
    }
}

fn bench_validation(c: &mut Criterion) {
    let market = input("MARKET", None, None);
    let stop_limit = input("STOP_LIMIT", Some("68000.50"), Some("67950"));

    c.bench_function("validate_market", |b| {
        b.iter(|| OrderRequest::try_from(black_box(&market)))
    });

    c.bench_function("validate_stop_limit", |b| {
        b.iter(|| OrderRequest::try_from(black_box(&stop_limit)))
    });
}

fn bench_payload(c: &mut Criterion) {
    let request = OrderRequest::try_from(&input("STOP_LIMIT", Some("68000.50"), Some("67950")))
        .expect("valid stop-limit input");

    c.bench_function("payload_params_stop_limit", |b| {
        b.iter(|| OrderPayload::from(black_box(&request)).params())
    });
}

criterion_group!(benches, bench_validation, bench_payload);
criterion_main!(benches);
