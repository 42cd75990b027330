//! Command-line parsing for the curve explorer.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the generation/rendering code.

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "curvelab",
    version,
    about = "Interactive explorer for interpolation curves over synthetic datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI explorer.
    Tui,
    /// Run one headless render pass and print a summary (useful for scripting).
    Render(RenderArgs),
    /// List the available dataset generators and curve variants.
    List,
}

/// Options for a headless render.
#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    /// Dataset generator name (defaults to the first one).
    #[arg(short = 'd', long)]
    pub dataset: Option<String>,

    /// Curve variant to draw; repeatable, case-insensitive.
    #[arg(short = 'c', long = "curve")]
    pub curves: Vec<String>,

    /// Raw parameter value, in spec order; repeatable, missing ones keep
    /// their defaults. Out-of-bounds values are clamped.
    #[arg(short = 'p', long = "param")]
    pub params: Vec<f64>,

    /// Shape parameter applied to every parameterized curve.
    #[arg(long)]
    pub shape: Option<f64>,
}
