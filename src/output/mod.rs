//! Report rendering (text/JSON) and delivery to stdout or a file.
mod format;
mod render;
mod writers;

#[cfg(test)]
mod tests;

pub use render::{render_json, render_text};
pub use writers::write_reports;
