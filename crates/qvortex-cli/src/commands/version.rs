//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - statevector simulation of editor circuits",
        style("qvortex").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qvortex-ir     Circuit model, validation and ordering");
    println!("  qvortex-sim    Statevector engine and shot sampling");
    println!("  qvortex-cli    Command-line interface");
    println!();
    println!(
        "Max qubits: {} (hard ceiling {})",
        qvortex_ir::DEFAULT_MAX_QUBITS,
        qvortex_ir::MAX_SUPPORTED_QUBITS
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
