//! Command-line interface for reagent-prep.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **load**: Load reagent files and emit the prior-seeded records
//! - **check**: Parse reagent files and report per-file counts
//!
//! ## Usage
//!
//! ```text
//! # Load one file per reaction component
//! reagent-prep load acids.smi amines.smi --minimum-uncertainty 0.1 --prior-std 2.5
//!
//! # Development runs: keep only the first 100 reagents per file
//! reagent-prep load acids.smi -n 100 --minimum-uncertainty 0.1 --prior-std 2.5
//!
//! # JSON output for scripting
//! reagent-prep load acids.smi --minimum-uncertainty 0.1 --prior-std 2.5 --format json
//!
//! # Structural check without caring about prior parameters
//! reagent-prep check acids.smi amines.smi
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod load;

#[derive(Parser)]
#[command(name = "reagent-prep")]
#[command(version)]
#[command(about = "Load reagent SMILES files and seed Bayesian priors for selection")]
#[command(
    long_about = "reagent-prep reads the per-component reagent files of a combinatorial library and constructs the records a reagent-selection engine starts from.\n\nEach file holds one reagent per line as '<smiles> <name>'. Every record is seeded with a Bayesian prior over its unknown mean score, described by an uncertainty floor and the assumed standard deviation of the scoring function's output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load reagent files and emit the prior-seeded records
    Load(load::LoadArgs),

    /// Parse reagent files and report per-file counts
    Check(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
