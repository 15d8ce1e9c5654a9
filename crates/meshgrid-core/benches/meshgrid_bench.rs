use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use meshgrid_core::{linspace, meshgrid};

fn axis(n: usize) -> Vec<f64> {
    linspace(-1.0, 1.0, n).unwrap_or_default()
}

fn bench_meshgrid_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("meshgrid_2d");
    for &n in &[100usize, 1_000usize] {
        let x = axis(n);
        let y = axis(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{n}x{n}")), &n, |b, _| {
            b.iter(|| { let _ = black_box(meshgrid((&x, &y))); });
        });
    }
    group.finish();
}

fn bench_meshgrid_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("meshgrid_3d");
    for &n in &[32usize, 128usize] {
        let x = axis(n);
        let y = axis(n);
        let z = axis(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{n}^3")), &n, |b, _| {
            b.iter(|| { let _ = black_box(meshgrid((&x, &y, &z))); });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_meshgrid_2d, bench_meshgrid_3d);
criterion_main!(benches);
