//! Benchmarks for statevector evolution and sampling
//!
//! Run with: cargo bench -p qvortex-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qvortex_ir::{Circuit, QubitId};
use qvortex_sim::{Cdf, SimConfig, Simulator, sample_counts};

/// Benchmark GHZ evolution across register sizes, without sampling
fn bench_ghz_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_evolution");
    group.sample_size(20);

    for num_qubits in &[4_u32, 10, 16, 20] {
        let ordered = Circuit::ghz(*num_qubits).unwrap().validate().unwrap();
        let simulator = Simulator::default();
        group.bench_with_input(
            BenchmarkId::new("statevector", num_qubits),
            &ordered,
            |b, ordered| {
                b.iter(|| black_box(simulator.simulate(ordered, 0).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark layered H/CX circuits with and without parallel kernels
fn bench_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_threshold");
    group.sample_size(10);

    let n = 18_u32;
    let mut circuit = Circuit::new(n);
    for _ in 0..4 {
        for q in 0..n {
            circuit.h(QubitId(q)).unwrap();
        }
        for q in 0..n - 1 {
            circuit.cx(QubitId(q), QubitId(q + 1)).unwrap();
        }
    }
    let ordered = circuit.validate().unwrap();

    for threshold in &[1_u32, 30] {
        let simulator = Simulator::new(SimConfig {
            parallel_threshold_qubits: *threshold,
            ..SimConfig::default()
        });
        group.bench_with_input(
            BenchmarkId::new("threshold", threshold),
            &ordered,
            |b, ordered| {
                b.iter(|| black_box(simulator.simulate(ordered, 0).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark shot sampling
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    let probabilities = vec![1.0 / 1024.0; 1024];
    let cdf = Cdf::new(&probabilities);
    for shots in &[1_000_u32, 100_000] {
        group.bench_with_input(BenchmarkId::new("shots", shots), shots, |b, &shots| {
            b.iter(|| black_box(sample_counts(&cdf, shots, Some(0))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ghz_evolution,
    bench_parallel_threshold,
    bench_sampling,
);

criterion_main!(benches);
