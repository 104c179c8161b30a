use astrolabe::chart::{load_chart_input_from_json, Body, ChartSettings};
use astrolabe::layout::{layout_chart_default, layout_planets, spread_angles, PlanetBand, WheelFrame};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SEVEN_GOVERNORS: &str = include_str!("../tests/fixtures/seven_governors.json");

fn bench_spread_angles(c: &mut Criterion) {
    // Worst case: every label starts on the same degree
    let angles = vec![42.0; 15];

    c.bench_function("spread_angles_clustered", |b| {
        b.iter(|| {
            let mut angles = angles.clone();
            spread_angles(black_box(&mut angles), black_box(12.0));
            angles
        })
    });
}

fn bench_layout_planets(c: &mut Criterion) {
    let frame = WheelFrame::seven_governors(800.0);
    let band = PlanetBand::toward_outer(120.0, 160.0);
    let settings = ChartSettings::default();
    let bodies: Vec<Body> = (0..11)
        .map(|i| Body::new(format!("body_{}", i), (i as f64) * 7.5))
        .collect();

    c.bench_function("layout_planets", |b| {
        b.iter(|| layout_planets(black_box(&bodies), &frame, band, &settings))
    });
}

fn bench_layout_chart(c: &mut Criterion) {
    let input = load_chart_input_from_json(SEVEN_GOVERNORS).expect("fixture parses");
    let settings = ChartSettings::default();

    c.bench_function("layout_chart_seven_governors", |b| {
        b.iter(|| layout_chart_default(black_box(&input), &settings))
    });
}

criterion_group!(benches, bench_spread_angles, bench_layout_planets, bench_layout_chart);
criterion_main!(benches);
