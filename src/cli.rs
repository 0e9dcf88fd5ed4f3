use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::profile::DEFAULT_SAMPLE_COUNT;

#[derive(Parser, Debug)]
#[command(author, version, about = "Letter-frequency based language detection tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the language of a document
    Detect(DetectCommand),

    /// Create and manage cached base profiles
    Cache(CacheCommand),
}

#[derive(Parser, Debug)]
pub struct DetectCommand {
    /// URL of the article to classify
    pub article: String,

    /// Languages to compare the article against (repeated or space-joined)
    #[arg(
        short,
        long,
        num_args = 1..,
        value_delimiter = ' ',
        default_values_t = vec!["pl".to_string(), "en".to_string(), "cz".to_string()]
    )]
    pub languages: Vec<String>,

    /// Directory holding cached base profiles
    #[arg(long, default_value = "models")]
    pub cache_dir: PathBuf,

    /// Articles to sample when generating a missing base profile
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub sample_count: usize,

    /// Extra attempts per failed article fetch
    #[arg(long, default_value = "0")]
    pub fetch_retries: u32,

    /// Network timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Generate missing base profiles without prompting
    #[arg(short = 'y', long)]
    pub assume_yes: bool,

    /// Render a letter-frequency comparison chart
    #[arg(long)]
    pub chart: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CacheCommand {
    /// Directory holding cached base profiles
    #[arg(short, long, default_value = "models")]
    pub cache_dir: PathBuf,

    #[command(subcommand)]
    pub command: CacheSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// List cached base profiles
    List {
        /// Show per-profile letter details
        #[arg(long)]
        detailed: bool,
    },

    /// Generate and persist base profiles
    Generate {
        /// Language codes to generate (e.g. "pl en cz")
        #[arg(required = true)]
        languages: Vec<String>,

        /// Articles to sample per language
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        sample_count: usize,

        /// Extra attempts per failed article fetch
        #[arg(long, default_value = "0")]
        fetch_retries: u32,

        /// Network timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Skip languages that already have a profile instead of erroring
        #[arg(long)]
        skip_existing: bool,
    },

    /// Remove a cached base profile
    Remove {
        /// Language code to remove
        language: String,

        /// Force removal without confirmation
        #[arg(short, long)]
        force: bool,
    },
}
