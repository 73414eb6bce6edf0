use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_core::{
    KeplerSolver, NodeMode, Planet, compute_positions, moon_position, planet_position,
    sun_position, true_rahu_deg,
};

fn series_bench(c: &mut Criterion) {
    let t = 0.24;

    let mut group = c.benchmark_group("series");
    group.bench_function("sun_position", |b| {
        b.iter(|| sun_position(black_box(t), black_box(-14.2)))
    });
    group.bench_function("moon_position", |b| b.iter(|| moon_position(black_box(t))));
    group.bench_function("true_rahu", |b| b.iter(|| true_rahu_deg(black_box(t))));
    group.finish();
}

fn planet_bench(c: &mut Criterion) {
    let t = 0.24;
    let (sl, sr) = sun_position(t, -14.2);

    let mut group = c.benchmark_group("planets");
    group.bench_function("kepler_solve_mercury", |b| {
        let solver = KeplerSolver::default();
        b.iter(|| solver.solve(black_box(2.1), black_box(0.2056)))
    });
    for p in [Planet::Mercury, Planet::Saturn] {
        group.bench_function(p.name(), |b| {
            b.iter(|| planet_position(p, black_box(t), sl, sr))
        });
    }
    group.finish();
}

fn snapshot_bench(c: &mut Criterion) {
    c.bench_function("compute_positions", |b| {
        b.iter(|| compute_positions(black_box(2_460_000.5), NodeMode::True))
    });
}

criterion_group!(benches, series_bench, planet_bench, snapshot_bench);
criterion_main!(benches);
