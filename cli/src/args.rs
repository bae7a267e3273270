//! Command-line definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deep-insight",
    version,
    about = "Structured employee interviews with AI-generated follow-ups"
)]
pub struct Cli {
    /// Seed file describing the business, its employees, and its questions
    #[arg(long, value_name = "FILE")]
    pub seed: PathBuf,

    /// Explicit configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Write interview transcripts to this JSONL file
    #[arg(long, value_name = "FILE")]
    pub transcript_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Simulate interviews for every employee of the seeded business
    Simulate,

    /// Simulate one employee's interview
    SimulateEmployee {
        /// Employee email from the seed file
        #[arg(long)]
        email: String,
    },

    /// Conduct a live interview, reading answers from stdin
    Interview {
        /// Employee email from the seed file
        #[arg(long)]
        email: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
