use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use meshgrid_core::{linspace, linspace_step};

fn bench_linspace(c: &mut Criterion) {
    let mut group = c.benchmark_group("linspace");
    for &n in &[1_000usize, 100_000usize, 1_000_000usize] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("alloc_n{n}")), &n, |b, &n| {
            b.iter(|| { let _ = black_box(linspace(0.0f64, 1.0, n)); });
        });
        let mut buf = vec![0.0f64; n];
        group.bench_with_input(BenchmarkId::from_parameter(format!("fill_n{n}")), &n, |b, _| {
            b.iter(|| { black_box(linspace_step(&mut buf, 0.0, 1e-3)); });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_linspace);
criterion_main!(benches);
