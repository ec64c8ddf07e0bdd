use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pulse_core::{layout_series, Series};

fn gen_series(n: usize) -> Series {
    let mut series = Series::new();
    for i in 0..n {
        // simple waveform, clamped non-negative
        let v = ((i as f64 * 0.3).sin() + 1.0) * 50.0;
        series.push(format!("p{i}"), v);
    }
    series
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_series");
    for &n in &[7usize, 12usize, 366usize] {
        let series = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, s| {
            b.iter(|| {
                let _ = black_box(layout_series(s, 120.0));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
