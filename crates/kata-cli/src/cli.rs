//! CLI definition using clap

use clap::{Parser, Subcommand};
use kata_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kata-runner")]
#[command(version)]
#[command(about = "Run the bundled programming drills and inspect the car record")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs the full drill sequence when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full drill sequence
    Run {
        /// Write the JSON report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Build a car record and show its total tank value
    Car {
        /// Paint color
        #[arg(long)]
        color: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Tank capacity (no range is enforced)
        #[arg(long, short = 't', default_value = "0")]
        tank_capacity: i32,

        /// Fuel price per unit. Uses config value if not specified.
        #[arg(long, short = 'p')]
        fuel_price: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default fuel price for the car record
        #[arg(long)]
        set_fuel_price: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
