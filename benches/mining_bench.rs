use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use mi_apriori::mi::apriori::support_count;
use mi_apriori::{mine, Database, Discretizer, MiningConfig, Pattern, Transaction};

/// Generate a synthetic event database
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Size of the item alphabet
/// - avg_transaction_size: Average events per transaction
/// - max_gap: Largest time step between consecutive events
fn generate_database(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    max_gap: i64,
) -> Database {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let len = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;

            let mut timestamp = 0i64;
            let events: Vec<(String, i64)> = (0..len)
                .map(|_| {
                    timestamp += rng.gen_range(0..=max_gap);
                    let item = rng.gen_range(0..num_items);
                    (format!("i{}", item), timestamp)
                })
                .collect();

            // timestamps only grow, so this never fails
            Transaction::new(events).unwrap()
        })
        .collect()
}

/// Benchmark the full level-wise search on growing databases
fn bench_mining_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("mi_apriori_scaling");
    group.sample_size(10);

    let configs = vec![
        ("small_50tx", 50, 8, 6),
        ("medium_200tx", 200, 10, 8),
        ("large_500tx", 500, 12, 8),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let db = generate_database(num_tx, num_items, avg_size, 4);

        group.bench_with_input(BenchmarkId::from_parameter(name), &db, |b, db| {
            b.iter(|| {
                let config = MiningConfig::default().with_min_support(0.2);
                mine(black_box(db), black_box(config))
            });
        });
    }

    group.finish();
}

/// Benchmark with different min_support thresholds
fn bench_mining_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("mi_apriori_min_support");
    group.sample_size(10);

    let db = generate_database(200, 8, 8, 4);

    for &min_sup in &[0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| {
                    let config = MiningConfig::default().with_min_support(sup).with_max_length(3);
                    mine(black_box(&db), black_box(config))
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a single support scan, which dominates each level
fn bench_support_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("mi_apriori_support");

    let discretizer = Discretizer::new(MiningConfig::default().buckets).unwrap();
    let pattern = Pattern::new(
        vec!["i0".into(), "i1".into(), "i2".into()],
        vec![1, 2, 1],
    )
    .unwrap();

    for &num_tx in &[100, 1000, 5000] {
        let db = generate_database(num_tx, 6, 12, 3);
        group.bench_with_input(BenchmarkId::from_parameter(num_tx), &db, |b, db| {
            b.iter(|| support_count(black_box(&pattern), black_box(db), &discretizer));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mining_scaling,
    bench_mining_min_support,
    bench_support_scan
);
criterion_main!(benches);
