//! Run command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use qvortex_sim::{SimConfig, Simulator};

use super::common::{load_circuit, print_results, write_output};

/// Arguments of the run command.
pub struct RunArgs<'a> {
    pub input: &'a str,
    pub shots: Option<u32>,
    pub seed: Option<u64>,
    pub config: Option<&'a str>,
    pub format: &'a str,
    pub output: Option<&'a str>,
}

/// Execute the run command.
pub async fn execute(args: RunArgs<'_>) -> Result<()> {
    let json = match args.format.to_lowercase().as_str() {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    };

    let mut config = SimConfig::load(args.config.map(Path::new))
        .context("Failed to load simulator configuration")?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    debug!("Simulator config: {:?}", config);

    let mut circuit = load_circuit(args.input)?;
    if let Some(shots) = args.shots {
        circuit = circuit.with_shots(shots);
    }
    let shots = circuit.shots().unwrap_or(config.shots);

    if !json {
        println!(
            "{} Running {} ({} qubits, {} gates, {} shots)",
            style("→").cyan().bold(),
            style(args.input).green(),
            circuit.num_qubits(),
            circuit.num_gates(),
            shots
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Simulating...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let simulator = Simulator::try_new(config)?;
    let outcome = simulator.run_async(circuit).await;
    spinner.finish_and_clear();
    let result = outcome?;

    if let Some(path) = args.output {
        write_output(path, &result.to_json_pretty()?)?;
        if !json {
            println!("  Result written to {}", style(path).green());
        }
    }

    if json {
        println!("{}", result.to_json_pretty()?);
    } else {
        print_results(&result);
    }

    Ok(())
}
