//! Core library for the `universe-insights` CLI.
//!
//! This crate mines the UniVerse backend access log into request events,
//! classifies each URL into a product feature and computes the usage reports
//! behind the analytics dashboard: error-prone features, schedule update
//! cadence, least/most used features, flashcard and meeting hour histograms,
//! flashcard subjects and reminder retention. Reports can be rendered as
//! text, JSON or PNG charts. The flashcard generator client used by the
//! backend lives here too.
pub mod args;
pub mod charts;
pub mod config;
pub mod error;
pub mod events;
pub mod flashcards;
pub mod output;
pub mod reports;
