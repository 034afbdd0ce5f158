use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stable_softmax::softmax;

fn benchmark_softmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax");

    for size in [3usize, 1_000, 100_000] {
        let logits: Vec<f64> = (0..size).map(|i| (i as f64 * 0.01).sin() * 1000.0).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &logits, |b, logits| {
            b.iter(|| softmax(black_box(logits)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_softmax);
criterion_main!(benches);
