//! Waymark CLI - deterministic collection generation
//!
//! This binary validates collection configurations, previews allocations,
//! and generates record metadata and composited images.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use waymark_cli::commands;
use waymark_cli::commands::generate::GenerateArgs;
use waymark_cli::logging;

/// Waymark - Deterministic Collection Generator
#[derive(Parser)]
#[command(name = "waymark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a collection configuration without generating
    Validate {
        /// Path to the configuration (JSON or YAML); bundled config if omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Output the report as JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the exact per-station allocation
    Plan {
        /// Path to the configuration (JSON or YAML); bundled config if omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the collection's metadata and images
    Generate {
        /// Path to the configuration (JSON or YAML); bundled config if omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Seed string (default: the configuration's seed)
        #[arg(short, long)]
        seed: Option<String>,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Asset root directory (default: ./assets)
        #[arg(short, long)]
        assets: Option<String>,

        /// Write metadata only, skip image compositing
        #[arg(long)]
        skip_images: bool,

        /// Output the report as JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print one generated record
    Inspect {
        /// Path to the configuration (JSON or YAML); bundled config if omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Seed string (default: the configuration's seed)
        #[arg(short, long)]
        seed: Option<String>,

        /// Record id (1-based)
        #[arg(long)]
        id: u32,

        /// Output the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Validate { config, json } => commands::validate::run(config.as_deref(), json),
        Commands::Plan { config, json } => commands::plan::run(config.as_deref(), json),
        Commands::Generate {
            config,
            seed,
            out_root,
            assets,
            skip_images,
            json,
        } => commands::generate::run(&GenerateArgs {
            config,
            seed,
            out_root,
            assets,
            skip_images,
            json,
        }),
        Commands::Inspect {
            config,
            seed,
            id,
            json,
        } => commands::inspect::run(config.as_deref(), seed.as_deref(), id, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
