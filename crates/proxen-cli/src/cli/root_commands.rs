use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate proxy files for every source holding marked interfaces.
    Generate(GenerateArgs),
    /// Report which sources hold marked interfaces, without writing anything.
    Check(CheckArgs),
    /// Print the generated proxy file for one source to stdout.
    Print(PrintArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Source files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output directory (defaults to [output] dir from configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write files for sources without marked interfaces
    #[arg(long)]
    pub all: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Source files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct PrintArgs {
    /// Source file to render
    pub file: PathBuf,
}
