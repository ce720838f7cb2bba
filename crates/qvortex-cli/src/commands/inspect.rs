//! Inspect command implementation.

use std::collections::BTreeMap;

use anyhow::Result;
use console::style;

use super::common::load_circuit;

/// Execute the inspect command.
pub fn execute(input: &str) -> Result<()> {
    let circuit = load_circuit(input)?;
    let ordered = circuit.validate()?;
    let dag = ordered.dag();

    println!("{} {}", style("Circuit").cyan().bold(), style(input).green());
    println!("  Qubits: {}", ordered.num_qubits());
    println!("  Gates:  {}", ordered.len());
    println!("  Depth:  {}", dag.depth());
    if let Some(shots) = circuit.shots() {
        println!("  Shots:  {shots}");
    }

    let mut by_name: BTreeMap<&str, usize> = BTreeMap::new();
    for op in ordered.operations() {
        *by_name.entry(op.name()).or_insert(0) += 1;
    }
    if !by_name.is_empty() {
        println!("\n  Gate counts:");
        for (name, count) in &by_name {
            println!("    {:<5} {}", style(name).yellow(), count);
        }
    }

    let measured = ordered.measured_qubits();
    if !measured.is_empty() {
        let list: Vec<_> = measured.iter().map(ToString::to_string).collect();
        println!("\n  Measured: {}", list.join(", "));
    }

    let layers = dag.layers();
    if !layers.is_empty() {
        println!("\n  Moments:");
        for (i, layer) in layers.iter().enumerate() {
            let ops: Vec<_> = layer
                .iter()
                .map(|&pos| ordered.gates()[pos].op.to_string())
                .collect();
            println!("    {:>3}: {}", i, ops.join("  "));
        }
    }

    Ok(())
}
