//! Validate command implementation.

use anyhow::Result;
use console::style;

use super::common::load_circuit;

/// Execute the validate command.
pub fn execute(input: &str, max_qubits: u32) -> Result<()> {
    let circuit = load_circuit(input)?;
    let ordered = circuit.validate_with_limit(max_qubits)?;

    println!(
        "{} {} is valid: {} qubits, {} gates ({} unitary)",
        style("✓").green().bold(),
        style(input).green(),
        ordered.num_qubits(),
        ordered.len(),
        ordered.num_unitary()
    );

    Ok(())
}
