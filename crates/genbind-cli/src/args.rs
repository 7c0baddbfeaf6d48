use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the genbind binary.
#[derive(Parser, Debug)]
#[command(
    name = "genbind",
    version,
    about = "Resolve concrete generic bindings from a declared type table"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the concrete type SUBTYPE binds to parameter INDEX of ANCESTOR.
    Resolve {
        /// Path to the JSON type table.
        #[arg(short = 't', long)]
        table: PathBuf,

        /// Name of the implementing type.
        subtype: String,

        /// Name of the generic interface or superclass.
        ancestor: String,

        /// Zero-based type parameter position.
        #[arg(default_value_t = 0)]
        index: usize,
    },

    /// Resolve every directly declared binding in the table and report failures.
    Check {
        /// Path to the JSON type table.
        #[arg(short = 't', long)]
        table: PathBuf,

        /// Report format.
        #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
