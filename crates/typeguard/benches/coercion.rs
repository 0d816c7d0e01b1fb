//! Coercion throughput for the common validators, on the success path and on
//! the failure path (which builds an error through the factory).

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use typeguard::prelude::*;

fn bench_success(c: &mut Criterion) {
    let cx = Coercer::standard();
    let int = required_int().min_value(0);
    let int_raw = json!("123456");
    let date = required_simple_date();
    let date_raw = json!("2024-05-01T12:30:00Z");
    let literal = required_literal(vec!["debug", "info", "warn", "error"]);
    let literal_raw = json!("warn");

    c.bench_function("int_from_string", |b| {
        b.iter(|| int.coerce(black_box(Some(&int_raw)), &cx))
    });
    c.bench_function("simple_date_from_rfc3339", |b| {
        b.iter(|| date.coerce(black_box(Some(&date_raw)), &cx))
    });
    c.bench_function("literal_member", |b| {
        b.iter(|| literal.coerce(black_box(Some(&literal_raw)), &cx))
    });
}

fn bench_failure(c: &mut Criterion) {
    let cx = Coercer::standard();
    let tag = Tag::new("payload").next("items").next(3_usize);
    let int = required_int().tag(&tag);
    let raw = json!("not a number");

    c.bench_function("int_failure_tagged", |b| {
        b.iter(|| int.coerce(black_box(Some(&raw)), &cx))
    });
    c.bench_function("tag_next", |b| b.iter(|| black_box(&tag).next("name")));
}

criterion_group!(benches, bench_success, bench_failure);
criterion_main!(benches);
