//! CLI for gridgrover — Grover grid search analysis and reporting.

mod chart;
mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridgrover")]
#[command(about = "gridgrover — Grover-search grid pattern matching, analyzed and rendered")]
#[command(version = gridgrover_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch the active configuration to a named research variation.
    /// With no name, list the catalog.
    Variation {
        /// Variation name (e.g. sparse_6x6)
        name: Option<String>,

        /// Active configuration file to overwrite
        #[arg(long, default_value = gridgrover_core::DEFAULT_CONFIG_FILE)]
        config: String,
    },

    /// Print the summary report for a completed search run
    Report {
        /// Execution record JSON produced by the circuit executor
        results: String,

        /// Active configuration file
        #[arg(long, default_value = gridgrover_core::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Also write the report to a file
        #[arg(long)]
        output: Option<String>,
    },

    /// Render the search grid in the terminal, highlighting the found position
    Map {
        /// Execution record JSON; omit to render the bare grid
        results: Option<String>,

        /// Active configuration file
        #[arg(long, default_value = gridgrover_core::DEFAULT_CONFIG_FILE)]
        config: String,
    },

    /// Render the six-panel analysis figure as a PNG
    Chart {
        /// Execution record JSON produced by the circuit executor
        results: String,

        /// Active configuration file
        #[arg(long, default_value = gridgrover_core::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Output image path
        #[arg(long, default_value = "grover_analysis.png")]
        output: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Variation { name, config } => {
            commands::variation::run(name.as_deref(), &config)
        }
        Commands::Report {
            results,
            config,
            output,
        } => commands::report::run(&results, &config, output.as_deref()),
        Commands::Map { results, config } => commands::map::run(results.as_deref(), &config),
        Commands::Chart {
            results,
            config,
            output,
        } => commands::chart::run(&results, &config, &output),
    }
}
