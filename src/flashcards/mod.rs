//! Flashcard generation from free text through a generative model.
//!
//! The model client is always constructed explicitly from configuration and
//! handed to whatever needs it; the prompt and reply format live in
//! [`build_prompt`] and [`parse_flashcards`].
mod client;
mod parse;


use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::error::FlashcardError;

pub use client::{FlashcardClientConfig, GeminiClient};
pub use parse::{build_prompt, parse_flashcards};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[async_trait]
pub trait FlashcardGenerator: Send + Sync {
    /// Turns study material into question/answer pairs. Material too thin to
    /// produce cards yields an empty list.
    async fn generate(&self, text: &str) -> Result<Vec<Flashcard>, FlashcardError>;
}

/// Reads `path` and generates flashcards from its content.
///
/// # Errors
///
/// Returns an error if the file cannot be read or generation fails.
pub async fn generate_from_file<TGenerator>(
    generator: &TGenerator,
    path: &Path,
) -> Result<Vec<Flashcard>, FlashcardError>
where
    TGenerator: FlashcardGenerator + ?Sized,
{
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| FlashcardError::ReadInput {
            path: path.to_path_buf(),
            source: err,
        })?;
    let cards = generator.generate(&text).await?;
    info!(
        "Generated {} flashcards from '{}'",
        cards.len(),
        path.display()
    );
    Ok(cards)
}
