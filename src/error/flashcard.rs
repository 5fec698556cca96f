use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("Missing API key: environment variable '{var}' is not set.")]
    MissingApiKey { var: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Generation request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("Model reply contained no text.")]
    EmptyReply,
    #[error("Malformed flashcard entry '{entry}'.")]
    MalformedEntry { entry: String },
    #[error("Failed to read input '{path}': {source}")]
    ReadInput {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
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
