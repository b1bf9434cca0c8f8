use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lapwatch_core::LapStopwatch;

fn bench_lap_recording(c: &mut Criterion) {
    c.bench_function("record_100_laps", |b| {
        b.iter(|| {
            let mut watch = LapStopwatch::start();
            for i in 0..100 {
                watch.lap(if i % 2 == 0 { "even" } else { "odd" });
            }
            black_box(watch.lap_count("even"));
        });
    });
}

fn bench_lap_queries(c: &mut Criterion) {
    let mut watch = LapStopwatch::start();
    for _ in 0..1000 {
        watch.lap("phase");
    }
    watch.lap("done");

    c.bench_function("difference_lookup", |b| {
        b.iter(|| black_box(watch.difference_at("phase", 999, "done", 0).unwrap()));
    });

    c.bench_function("report_snapshot", |b| {
        b.iter(|| black_box(watch.report()));
    });
}

criterion_group!(benches, bench_lap_recording, bench_lap_queries);
criterion_main!(benches);
