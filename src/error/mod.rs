mod analytics;
mod app;
mod config;
mod flashcard;
mod output;
mod validation;

#[cfg(test)]
mod test_support;

pub use analytics::AnalyticsError;
pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use flashcard::FlashcardError;
pub use output::OutputError;
pub use validation::ValidationError;
