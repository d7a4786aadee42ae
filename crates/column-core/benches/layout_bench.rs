use column_core::{
    render_chart, AxisSpec, ChartSettings, ChartVariant, Dataset, Record, SceneOptions, SceneSurface, Side,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_dataset(n: usize, series: usize) -> Dataset {
    let names = (0..series).map(|s| format!("s{s}")).collect();
    let records = (0..n)
        .map(|i| {
            let values = (0..series)
                .map(|s| ((i * (s + 1)) as f64 * 0.37).sin() * 1000.0 + 250.0)
                .collect();
            Record::new(format!("{}-{:02}", 2000 + i / 12, i % 12 + 1), values)
        })
        .collect();
    Dataset::new("month", names, records).expect("valid dataset")
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_chart_scene");
    for variant in [ChartVariant::Clustered, ChartVariant::Stacked, ChartVariant::Stacked100] {
        for &n in &[24usize, 240usize, 5_000usize] {
            let data = build_dataset(n, 3);
            let settings = ChartSettings::new(variant.clone())
                .with_axis(Side::Bottom, AxisSpec::shown().labelled("Month"))
                .with_axis(Side::Left, AxisSpec::shown().labelled("Amount"));
            group.bench_function(format!("{variant}_{n}"), |b| {
                b.iter(|| {
                    let mut scene = SceneSurface::new(SceneOptions::default());
                    render_chart(&mut scene, &settings, &data);
                    black_box(scene.measure_calls());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
