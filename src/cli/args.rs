//! Command line argument parsing for the Banter CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Banter - a lightweight FAQ intent matching chat bot
#[derive(Parser, Debug, Clone)]
#[command(name = "banter")]
#[command(about = "A lightweight FAQ intent matching chat bot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Banter Contributors")]
#[command(long_about = None)]
pub struct BanterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BanterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate an intent corpus document
    Validate(ValidateArgs),

    /// Show corpus statistics
    Stats(StatsArgs),

    /// Match a single query against a corpus
    Match(MatchArgs),

    /// Start an interactive chat session
    Chat(ChatArgs),
}

/// Arguments for validating a corpus
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the corpus document (JSON)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus document (JSON)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,
}

/// Arguments for one-shot matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Path to the corpus document (JSON)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Query text to match
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Matching strategy
    #[arg(short, long, default_value = "similarity")]
    pub matcher: MatcherKind,

    /// Seed for response selection (deterministic runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep stop words when vectorizing
    #[arg(long)]
    pub keep_stop_words: bool,
}

/// Arguments for the interactive chat session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Path to the corpus document (JSON)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Matching strategy
    #[arg(short, long, default_value = "similarity")]
    pub matcher: MatcherKind,

    /// Seed for response selection (deterministic runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep stop words when vectorizing
    #[arg(long)]
    pub keep_stop_words: bool,

    /// Optional menu document enabling /menu, /add, /cart and /checkout
    #[arg(long, value_name = "MENU_FILE")]
    pub menu: Option<PathBuf>,
}

/// Matching strategy selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// Case-insensitive substring containment
    Keyword,
    /// TF-IDF cosine similarity with confidence bands
    Similarity,
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
