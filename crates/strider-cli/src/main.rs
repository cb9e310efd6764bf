//! Strider CLI - Headless harness for the character controller

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{simulate, validate};

#[derive(Parser)]
#[command(name = "strider")]
#[command(about = "Headless harness for the Strider character controller", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scene file and print a summary
    Validate {
        /// Path to scene file
        scene: String,
    },

    /// Run a scripted headless simulation against a scene
    Simulate {
        /// Path to scene file
        scene: String,

        /// Steps to run when no script is given
        #[arg(long, default_value_t = 300)]
        steps: u32,

        /// Fixed per-step delta in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        delta: f32,

        /// Path to an input script TOML
        #[arg(long)]
        script: Option<String>,

        /// Print the character state every N steps
        #[arg(long, default_value_t = 30)]
        trace_every: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { scene } => validate::run(&scene),
        Commands::Simulate {
            scene,
            steps,
            delta,
            script,
            trace_every,
        } => simulate::run(simulate::SimulateArgs {
            scene,
            steps,
            delta,
            script,
            trace_every,
        }),
    }
}
