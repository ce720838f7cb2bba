//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qvortex_ir::{Circuit, basis_bitstring};
use qvortex_sim::SimulationResult;

/// Outcomes shown before the table is truncated.
const MAX_ROWS: usize = 16;

/// Load a circuit document from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    Circuit::from_json(&source).with_context(|| format!("Invalid circuit document: {path}"))
}

/// Print sampled counts with frequency bars, then the non-zero amplitudes.
pub fn print_results(result: &SimulationResult) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.sorted_counts();
    let total = result.total_shots().max(1) as f64;

    for (bitstring, count) in sorted.iter().take(MAX_ROWS) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > MAX_ROWS {
        println!("  ... and {} more outcomes", sorted.len() - MAX_ROWS);
    }

    print_amplitudes(result);

    println!(
        "\n  Execution time: {} ms",
        style(format!("{:.3}", result.execution_time_ms)).yellow()
    );
}

/// Print basis states with non-negligible amplitude: probability, magnitude
/// and phase.
fn print_amplitudes(result: &SimulationResult) {
    let n = result.num_qubits();
    let nonzero: Vec<_> = result
        .statevector
        .iter()
        .enumerate()
        .filter(|(_, a)| a.probability() > 1e-12)
        .collect();

    println!("\n  Amplitudes ({} non-zero):", nonzero.len());
    for (idx, amp) in nonzero.iter().take(MAX_ROWS) {
        println!(
            "  |{}⟩  {:>+.4}{:>+.4}i  p={:.4}  |a|={:.4}  φ={:>7.2}°",
            style(basis_bitstring(*idx, n)).cyan(),
            amp.real,
            amp.imag,
            amp.probability(),
            amp.magnitude(),
            amp.phase_degrees()
        );
    }
    if nonzero.len() > MAX_ROWS {
        println!("  ... and {} more", nonzero.len() - MAX_ROWS);
    }
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_output(path: &str, contents: &str) -> Result<()> {
    let path_obj = Path::new(path);
    if let Some(parent) = path_obj.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path_obj, contents).with_context(|| format!("Failed to write file: {path}"))
}
