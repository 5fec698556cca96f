//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::{AnalyzeArgs, Command, FlashcardArgs, InsightsArgs};
pub use types::{LogEncoding, OutputFormat, PositiveUsize};

pub(crate) use defaults::{DEFAULT_LOG_FILE, DEFAULT_TOP_N};
#[cfg(test)]
pub(crate) use defaults::default_charts_path;
