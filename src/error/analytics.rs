use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Failed to read log '{path}': {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Log '{path}' line {line} is not valid UTF-8: {source}")]
    DecodeLine {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("Invalid pattern for {context}: {source}")]
    Pattern {
        context: &'static str,
        #[source]
        source: regex::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
