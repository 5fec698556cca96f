//! Access-log extraction: line grammar, file loading and URL feature
//! classification.
mod feature;
mod grammar;
mod loader;
mod types;


pub use feature::{FLASHCARD_FEATURE, feature_key};
pub use grammar::LogGrammar;
pub use loader::load_events;
pub use types::{HttpMethod, RequestEvent};
