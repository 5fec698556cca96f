use clap::{Args, Parser, Subcommand};

use super::defaults::{DEFAULT_LOG_FILE, default_charts_path};
use super::parsers::{parse_bool_env, parse_encoding, parse_positive_usize};
use super::types::{LogEncoding, OutputFormat, PositiveUsize};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Mine an access log into usage reports and charts
    Analyze(AnalyzeArgs),
    /// Generate question/answer flashcards from a text file
    Flashcards(FlashcardArgs),
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    /// Access log to analyze
    #[arg(long = "log-file", short = 'f', default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,

    /// Log encoding (utf8 or latin1)
    #[arg(long, default_value = "utf8", value_parser = parse_encoding)]
    pub encoding: LogEncoding,

    /// Report output format
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Write reports to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<String>,

    /// Directory for chart PNGs
    #[arg(long = "charts-path", default_value_t = default_charts_path())]
    pub charts_path: String,

    /// Skip chart rendering
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Entries kept by the least/most used feature rankings
    #[arg(long = "top-n", default_value = "5", value_parser = parse_positive_usize)]
    pub top_n: PositiveUsize,
}

#[derive(Debug, Args, Clone)]
pub struct FlashcardArgs {
    /// Text file to turn into flashcards
    #[arg(long, short)]
    pub input: String,

    /// Model name (overrides config)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    arg_required_else_help = true,
    about = "Usage analytics for the UniVerse backend - mines access logs into feature, cadence and retention reports with optional chart exports."
)]
pub struct InsightsArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (TOML or JSON)
    #[arg(long, env = "UNIVERSE_INSIGHTS_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = parse_bool_env,
        global = true
    )]
    pub no_color: bool,
}
