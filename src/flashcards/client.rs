use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse::{build_prompt, parse_flashcards};
use super::{Flashcard, FlashcardGenerator};
use crate::config::types::FlashcardsConfig;
use crate::error::FlashcardError;

const DEFAULT_API_KEY_ENV: &str = "LLM_API";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardClientConfig {
    pub api_key_env: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for FlashcardClientConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FlashcardClientConfig {
    /// Layers the config file section over the defaults.
    #[must_use]
    pub fn from_file(section: Option<&FlashcardsConfig>) -> Self {
        let mut config = Self::default();
        let Some(section) = section else {
            return config;
        };
        if let Some(api_key_env) = section.api_key_env.clone() {
            config.api_key_env = api_key_env;
        }
        if let Some(model) = section.model.clone() {
            config.model = model;
        }
        if let Some(endpoint) = section.endpoint.clone() {
            config.endpoint = endpoint;
        }
        if let Some(timeout_secs) = section.timeout_secs {
            config.timeout = Duration::from_secs(timeout_secs);
        }
        config
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'prompt> {
    contents: [RequestContent<'prompt>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'prompt> {
    parts: [RequestPart<'prompt>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'prompt> {
    text: &'prompt str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    url: String,
}

impl GeminiClient {
    /// Builds a client, reading the API key from the configured variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key variable is unset or the HTTP client
    /// cannot be built.
    pub fn new(config: &FlashcardClientConfig) -> Result<Self, FlashcardError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FlashcardError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;
        Self::with_api_key(config, api_key)
    }

    /// Builds a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_api_key(
        config: &FlashcardClientConfig,
        api_key: String,
    ) -> Result<Self, FlashcardError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FlashcardError::BuildClient { source: err })?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Ok(Self { http, api_key, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FlashcardGenerator for GeminiClient {
    async fn generate(&self, text: &str) -> Result<Vec<Flashcard>, FlashcardError> {
        let prompt = build_prompt(text);
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: &prompt }],
            }],
        };
        debug!("Requesting flashcards from {}", self.url);
        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| FlashcardError::Request { source: err })?;
        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|err| FlashcardError::Request { source: err })?;

        let reply: String = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .ok_or(FlashcardError::EmptyReply)?;
        parse_flashcards(&reply)
    }
}
