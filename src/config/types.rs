use serde::Deserialize;

use crate::args::OutputFormat;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "log")]
    pub log_file: Option<String>,
    pub encoding: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub output: Option<String>,
    pub charts_path: Option<String>,
    pub no_charts: Option<bool>,
    pub top_n: Option<usize>,
    pub flashcards: Option<FlashcardsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlashcardsConfig {
    pub api_key_env: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}
