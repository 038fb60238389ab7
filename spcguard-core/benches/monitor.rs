//! Push and snapshot cost over a full window

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spcguard_core::{source::MockSensor, MonitorConfig, ProcessMonitor, ReadingSource};

fn full_monitor() -> ProcessMonitor<60> {
    let mut monitor = ProcessMonitor::new(MonitorConfig::default()).expect("default config");
    monitor.ingest(MockSensor::bench(), 60);
    monitor
}

fn bench_push(c: &mut Criterion) {
    let mut monitor = full_monitor();
    let mut sensor = MockSensor::bench();

    c.bench_function("push_and_classify_w60", |b| {
        b.iter(|| {
            let value = sensor.next_reading().unwrap_or(40.0);
            black_box(monitor.push(black_box(value)))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let monitor = full_monitor();

    c.bench_function("snapshot_w60", |b| b.iter(|| black_box(monitor.snapshot())));
}

criterion_group!(benches, bench_push, bench_snapshot);
criterion_main!(benches);
