//! Criterion benchmarks for the C-SCAN engine and simulation driver.
//!
//! Uses seeded uniform workloads so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_disksched::cylinder::{Cylinder, Direction};
use u_disksched::queue::{CScanQueue, CircularScan, DiskQueue};
use u_disksched::simulation::{SimulationConfig, SimulationRunner, Workload};

fn workload(count: usize, max_arrival: i64) -> Vec<Cylinder> {
    Workload::new(0, 4_999)
        .with_count(count)
        .with_max_arrival(max_arrival)
        .with_seed(42)
        .generate()
        .expect("valid workload")
}

// ===========================================================================
// Engine: drain a full queue through select_next
// ===========================================================================

fn bench_select_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("cscan_select_drain");

    for &size in &[100usize, 1_000] {
        let requests = workload(size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, reqs| {
            b.iter(|| {
                let mut queue = CScanQueue::new();
                for cylinder in reqs.iter().cloned() {
                    queue.add(cylinder);
                }
                let mut head = 2_500;
                while let Some(next) = queue.select_next(head, Direction::TowardHigh, false) {
                    head = next.track();
                    queue.advance_waiting_time();
                }
                black_box(head)
            });
        });
    }

    group.finish();
}

// ===========================================================================
// Driver: full tick loop with staggered arrivals
// ===========================================================================

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");
    group.sample_size(20);

    let config = SimulationConfig::default()
        .with_track_range(0, 4_999)
        .with_initial_head(2_500);

    for &size in &[50usize, 500] {
        let requests = workload(size, 10_000);
        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, reqs| {
            b.iter(|| black_box(SimulationRunner::run(reqs.clone(), &config).expect("valid run")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_drain, bench_simulation);
criterion_main!(benches);
