use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::Utc;
use stockroom_core::{LocationId, MovementId, ProductId};
use stockroom_ledger::{Movement, MovementType, balance};

/// Synthetic log: receipts and picks spread over a handful of products and
/// locations, picks sized so no balance goes negative.
fn synthetic_log(len: usize) -> Vec<Movement> {
    let now = Utc::now();
    (0..len)
        .map(|i| {
            let product_id = ProductId::new(format!("P{}", i % 7));
            let location_id = LocationId::new(format!("L{}", i % 3));
            let is_receipt = i % 2 == 0;
            Movement {
                id: MovementId::from_sequence(i as u32 + 1),
                kind: if is_receipt {
                    MovementType::Receipt
                } else {
                    MovementType::Pick
                },
                product_id,
                to_location_id: is_receipt.then(|| location_id.clone()),
                from_location_id: (!is_receipt).then(|| location_id.clone()),
                qty: if is_receipt { 10 } else { 1 },
                reference: format!("REF-{i}"),
                timestamp: now,
            }
        })
        .collect()
}

fn bench_available_by_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("available_by_replay");
    let product = ProductId::new("P1");
    let location = LocationId::new("L1");

    for len in [100usize, 1_000, 10_000] {
        let movements = synthetic_log(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &movements, |b, movements| {
            b.iter(|| {
                stockroom_ledger::available_by_replay(
                    black_box(movements),
                    black_box(&product),
                    black_box(&location),
                )
            })
        });
    }
    group.finish();
}

fn bench_rebuild_balances(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_balances");

    for len in [100usize, 1_000, 10_000] {
        let movements = synthetic_log(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &movements, |b, movements| {
            b.iter(|| balance::rebuild(black_box(movements)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_available_by_replay, bench_rebuild_balances);
criterion_main!(benches);
