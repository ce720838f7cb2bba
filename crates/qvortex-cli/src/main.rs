//! qvortex Command-Line Interface
//!
//! Runs, validates and inspects circuit documents exported by the qvortex
//! editor.
//!
//! ```text
//! qvortex run -i bell.json --seed 7
//! qvortex run -i bell.json --format json -o result.json
//! qvortex validate -i bell.json
//! qvortex inspect -i bell.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{inspect, run, validate, version};

/// qvortex - statevector simulation of editor circuits
#[derive(Parser)]
#[command(name = "qvortex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a circuit and sample measurement outcomes
    Run {
        /// Input circuit document (JSON)
        #[arg(short, long)]
        input: String,

        /// Number of shots (overrides the document and config)
        #[arg(short, long)]
        shots: Option<u32>,

        /// RNG seed for reproducible counts
        #[arg(long, env = "QVORTEX_SEED")]
        seed: Option<u64>,

        /// Config file (YAML); defaults to ~/.qvortex/config.yaml
        #[arg(short, long)]
        config: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the result document to a file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check a circuit document without running it
    Validate {
        /// Input circuit document (JSON)
        #[arg(short, long)]
        input: String,

        /// Maximum register width
        #[arg(long, default_value = "24")]
        max_qubits: u32,
    },

    /// Show circuit structure: gate counts, depth, moments
    Inspect {
        /// Input circuit document (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            input,
            shots,
            seed,
            config,
            format,
            output,
        } => {
            run::execute(run::RunArgs {
                input: &input,
                shots,
                seed,
                config: config.as_deref(),
                format: &format,
                output: output.as_deref(),
            })
            .await
        }

        Commands::Validate { input, max_qubits } => validate::execute(&input, max_qubits),

        Commands::Inspect { input } => inspect::execute(&input),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
