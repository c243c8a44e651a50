use clap::Parser;
use std::path::PathBuf;

/// Shorten text on word boundaries without leaving stray punctuation
#[derive(Debug, Parser)]
#[command(name = "wordcut", version, about)]
pub struct Args {
    /// Text to truncate; stdin is read when omitted
    pub text: Vec<String>,

    /// Maximum number of characters
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Word separator (a single character)
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Explicit config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Truncate each line of input separately
    #[arg(long)]
    pub lines: bool,

    /// Print one JSON record per truncated item
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a default config file and exit
    #[arg(long)]
    pub init_config: bool,
}
