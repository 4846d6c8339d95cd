// bcg/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bcg")]
#[command(about = "Generates BCG publish entries from an inventory workbook", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Reads the inventory and writes the BCG workbook
    Run {
        /// Run configuration (YAML)
        config: PathBuf,
    },

    /// 👀 Shows the BCG entries a run would write, without writing them
    Preview {
        /// Run configuration (YAML)
        config: PathBuf,

        /// Maximum number of rows to display
        #[arg(long, short, default_value = "20")]
        limit: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = PreviewFormat::Table)]
        format: PreviewFormat,
    },

    /// ✅ Loads and validates the configuration only
    Validate {
        /// Run configuration (YAML)
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    Table,
    Json,
}
