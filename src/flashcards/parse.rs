use super::Flashcard;
use crate::error::FlashcardError;

const PROMPT_HEADER: &str = "Generate flashcards strictly in the following format:\n\
'question1:answer1$question2:answer2$question3:answer3'.\n\n\
Do not add explanations, headers, or any other text.\n\
Here is the information to generate flashcards from.\n\
If there is not enough information to create flashcards, return nothing (blank string):\n\n";

const CARD_SEPARATOR: char = '$';
const FIELD_SEPARATOR: char = ':';

#[must_use]
pub fn build_prompt(text: &str) -> String {
    format!("{}{}", PROMPT_HEADER, text)
}

/// Parses a `question:answer$question:answer` model reply.
///
/// Markdown emphasis is stripped first. A reply without both separators means
/// the model declined, and yields no cards. Blank entries (e.g. a trailing `$`)
/// are ignored.
///
/// # Errors
///
/// Returns `MalformedEntry` when a non-blank entry has no `:`.
pub fn parse_flashcards(reply: &str) -> Result<Vec<Flashcard>, FlashcardError> {
    let cleaned = reply.replace('*', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty()
        || !cleaned.contains(FIELD_SEPARATOR)
        || !cleaned.contains(CARD_SEPARATOR)
    {
        return Ok(Vec::new());
    }

    let mut cards = Vec::new();
    for entry in cleaned.split(CARD_SEPARATOR) {
        if entry.trim().is_empty() {
            continue;
        }
        let Some((question, answer)) = entry.split_once(FIELD_SEPARATOR) else {
            return Err(FlashcardError::MalformedEntry {
                entry: entry.trim().to_owned(),
            });
        };
        cards.push(Flashcard {
            question: question.trim().to_owned(),
            answer: answer.trim().to_owned(),
        });
    }
    Ok(cards)
}
