//! End-to-end checks of the statevector engine.

use std::f64::consts::FRAC_1_SQRT_2;

use proptest::prelude::*;
use qvortex_ir::{Circuit, Gate, Operation, QubitId, ValidationError};
use qvortex_sim::{SimConfig, SimError, Simulator, Statevector, simulate};

const EPS: f64 = 1e-10;

fn seeded(seed: u64) -> Simulator {
    Simulator::new(SimConfig::default().with_seed(seed))
}

fn assert_amp(actual: &qvortex_sim::Amplitude, real: f64, imag: f64) {
    assert!(
        (actual.real - real).abs() < EPS && (actual.imag - imag).abs() < EPS,
        "expected ({real}, {imag}), got ({}, {})",
        actual.real,
        actual.imag
    );
}

// ---------------------------------------------------------------------------
// Norm conservation
// ---------------------------------------------------------------------------

fn arb_unitary(n: u32) -> impl Strategy<Value = Operation> {
    let q = 0..n;
    let pair = (0..n, 1..n.max(2)).prop_map(move |(a, off)| (QubitId(a), QubitId((a + off) % n)));
    prop_oneof![
        q.clone().prop_map(|t| Operation::H { target: QubitId(t) }),
        q.clone().prop_map(|t| Operation::X { target: QubitId(t) }),
        q.clone().prop_map(|t| Operation::Y { target: QubitId(t) }),
        q.clone().prop_map(|t| Operation::Z { target: QubitId(t) }),
        q.clone().prop_map(|t| Operation::S { target: QubitId(t) }),
        q.clone().prop_map(|t| Operation::T { target: QubitId(t) }),
        pair.clone().prop_map(|(control, target)| Operation::CX { control, target }),
        pair.clone().prop_map(|(control, target)| Operation::CZ { control, target }),
        pair.prop_map(|(control, target)| Operation::Swap { control, target }),
    ]
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=6).prop_flat_map(|n| {
        prop::collection::vec(arb_unitary(n), 0..40).prop_map(move |ops| {
            let gates = ops
                .into_iter()
                .enumerate()
                .map(|(i, op)| Gate::new(format!("g{i}"), i as u32, op))
                .collect();
            Circuit::from_gates(n, gates)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn norm_is_conserved(circuit in arb_circuit()) {
        let ordered = circuit.validate().unwrap();
        let mut sv = Statevector::new(ordered.num_qubits() as usize);
        for op in ordered.operations() {
            sv.apply(op);
        }
        prop_assert!((sv.norm_sqr() - 1.0).abs() <= 1e-9);

        let result = simulate(&ordered, 16).unwrap();
        let norm: f64 = result.probabilities().iter().sum();
        prop_assert!((norm - 1.0).abs() <= 1e-9);
        prop_assert_eq!(result.total_shots(), 16);
    }

    #[test]
    fn sampled_outcomes_have_nonzero_probability(circuit in arb_circuit()) {
        let result = seeded(5).run_with_shots(&circuit, 200).unwrap();
        let probs = result.probabilities();
        for bitstring in result.counts.keys() {
            let idx = usize::from_str_radix(bitstring, 2).unwrap();
            prop_assert!(probs[idx] > 0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Gate identities
// ---------------------------------------------------------------------------

#[test]
fn x_twice_is_identity() {
    let mut circuit = Circuit::new(2);
    circuit.h(QubitId(1)).unwrap();
    circuit.x(QubitId(0)).unwrap();
    circuit.x(QubitId(0)).unwrap();
    let with_xx = seeded(1).run_with_shots(&circuit, 0).unwrap();

    let mut reference = Circuit::new(2);
    reference.h(QubitId(1)).unwrap();
    let without = seeded(1).run_with_shots(&reference, 0).unwrap();

    for (a, b) in with_xx.statevector.iter().zip(&without.statevector) {
        assert_amp(a, b.real, b.imag);
    }
}

#[test]
fn z_flips_phase_of_one() {
    let mut circuit = Circuit::new(1);
    circuit.h(QubitId(0)).unwrap();
    circuit.z(QubitId(0)).unwrap();

    let result = seeded(2).run(&circuit).unwrap();
    assert_amp(&result.statevector[0], FRAC_1_SQRT_2, 0.0);
    assert_amp(&result.statevector[1], -FRAC_1_SQRT_2, 0.0);
    assert!((result.statevector[1].phase_degrees() - 180.0).abs() < 1e-9);
}

#[test]
fn x_then_z_negates_one() {
    let mut circuit = Circuit::new(1);
    circuit.x(QubitId(0)).unwrap();
    circuit.z(QubitId(0)).unwrap();

    let result = seeded(4).run(&circuit).unwrap();
    assert_amp(&result.statevector[0], 0.0, 0.0);
    assert_amp(&result.statevector[1], -1.0, 0.0);
    assert!((result.statevector[1].magnitude() - 1.0).abs() < 1e-9);
    assert!((result.statevector[1].phase_degrees() - 180.0).abs() < 1e-9);
    assert_eq!(result.counts.get("1").copied(), Some(1000));
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

#[test]
fn hadamard_is_fair() {
    let mut circuit = Circuit::new(1);
    circuit.h(QubitId(0)).unwrap();
    circuit.measure(QubitId(0)).unwrap();

    let result = seeded(2024).run_with_shots(&circuit, 100_000).unwrap();
    assert_eq!(result.total_shots(), 100_000);
    // ~6 standard deviations
    let zeros = result.frequency("0");
    assert!((zeros - 0.5).abs() < 0.01, "P(0) = {zeros}");
}

#[test]
fn bell_state_amplitudes_and_counts() {
    let result = seeded(9).run(&Circuit::bell().unwrap()).unwrap();

    assert_amp(&result.statevector[0], FRAC_1_SQRT_2, 0.0);
    assert_amp(&result.statevector[1], 0.0, 0.0);
    assert_amp(&result.statevector[2], 0.0, 0.0);
    assert_amp(&result.statevector[3], FRAC_1_SQRT_2, 0.0);

    assert!(result.counts.keys().all(|k| k == "00" || k == "11"));
    assert_eq!(result.counts.values().sum::<u64>(), 1000);
    let zeros = result.frequency("00");
    assert!((zeros - 0.5).abs() < 0.08, "P(00) = {zeros}");
}

#[test]
fn basis_state_is_deterministic() {
    let circuit = Circuit::from_json(
        r#"{"qubits": 3, "gates": [
            {"type": "X", "target": 0, "time": 0, "id": "a"},
            {"type": "X", "target": 2, "time": 0, "id": "b"}
        ]}"#,
    )
    .unwrap();
    let result = Simulator::default().run_with_shots(&circuit, 500).unwrap();
    assert_eq!(result.counts.len(), 1);
    assert_eq!(result.counts["101"], 500);
}

// ---------------------------------------------------------------------------
// Ordering and reproducibility
// ---------------------------------------------------------------------------

#[test]
fn list_order_does_not_change_result() {
    let gates = vec![
        Gate::new("h0", 0, Operation::H { target: QubitId(0) }),
        Gate::new("x2", 0, Operation::X { target: QubitId(2) }),
        Gate::new(
            "cx",
            1,
            Operation::CX {
                control: QubitId(0),
                target: QubitId(1),
            },
        ),
        Gate::new("t2", 1, Operation::T { target: QubitId(2) }),
        Gate::new("m", 2, Operation::M { target: QubitId(1) }),
    ];
    let mut reversed = gates.clone();
    reversed.reverse();

    let a = seeded(77).run(&Circuit::from_gates(3, gates)).unwrap();
    let b = seeded(77).run(&Circuit::from_gates(3, reversed)).unwrap();
    assert_eq!(a.statevector, b.statevector);
    assert_eq!(a.counts, b.counts);
}

#[test]
fn same_slot_gates_run_in_list_order() {
    let x = Gate::new("x", 0, Operation::X { target: QubitId(0) });
    let h = Gate::new("h", 0, Operation::H { target: QubitId(0) });

    // X then H leaves |->, H then X leaves |+>.
    let xh = seeded(5)
        .run(&Circuit::from_gates(1, vec![x.clone(), h.clone()]))
        .unwrap();
    assert_amp(&xh.statevector[0], FRAC_1_SQRT_2, 0.0);
    assert_amp(&xh.statevector[1], -FRAC_1_SQRT_2, 0.0);

    let hx = seeded(5).run(&Circuit::from_gates(1, vec![h, x])).unwrap();
    assert_amp(&hx.statevector[0], FRAC_1_SQRT_2, 0.0);
    assert_amp(&hx.statevector[1], FRAC_1_SQRT_2, 0.0);
}

#[test]
fn seed_reproduces_histogram() {
    let circuit = Circuit::ghz(4).unwrap();
    let a = seeded(123).run_with_shots(&circuit, 10_000).unwrap();
    let b = seeded(123).run_with_shots(&circuit, 10_000).unwrap();
    assert_eq!(a.counts, b.counts);
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn invalid_circuits_produce_no_result() {
    let out_of_range = Circuit::from_gates(
        2,
        vec![Gate::new("bad", 0, Operation::H { target: QubitId(5) })],
    );
    assert!(matches!(
        Simulator::default().run(&out_of_range),
        Err(SimError::Validation(ValidationError::InvalidQubitIndex { .. }))
    ));

    let self_control = Circuit::from_gates(
        2,
        vec![Gate::new(
            "loop",
            0,
            Operation::CX {
                control: QubitId(1),
                target: QubitId(1),
            },
        )],
    );
    assert!(matches!(
        Simulator::default().run(&self_control),
        Err(SimError::Validation(ValidationError::InvalidControlTarget { .. }))
    ));

    assert!(matches!(
        Simulator::default().run(&Circuit::new(25)),
        Err(SimError::Validation(ValidationError::QubitCountExceeded {
            requested: 25,
            max: 24
        }))
    ));
}

#[test]
fn result_document_is_camel_case() {
    let result = seeded(1).run(&Circuit::bell().unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert!(json.get("executionTimeMs").is_some());
    assert_eq!(json["shots"], 1000);
    assert_eq!(json["statevector"].as_array().unwrap().len(), 4);
}
