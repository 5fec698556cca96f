use chrono::NaiveDateTime;
use regex::Regex;

use super::types::{HttpMethod, RequestEvent};
use crate::error::AnalyticsError;

const LINE_PATTERN: &str = r"([0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}).*?Method: (\w+).*?URL: (\S+).*?Response: ([0-9]+)";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const STATUS_RANGE: std::ops::RangeInclusive<u16> = 100..=599;

/// Compiled access-log line grammar.
///
/// A line yields an event only when the timestamp, a known verb, the URL token
/// and an in-range status are all present; every other line is ignored.
#[derive(Debug, Clone)]
pub struct LogGrammar {
    line: Regex,
}

impl LogGrammar {
    /// Compiles the line grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in pattern fails to compile.
    pub fn new() -> Result<Self, AnalyticsError> {
        let line = Regex::new(LINE_PATTERN).map_err(|err| AnalyticsError::Pattern {
            context: "log line grammar",
            source: err,
        })?;
        Ok(Self { line })
    }

    #[must_use]
    pub fn parse_line(&self, line: &str) -> Option<RequestEvent> {
        let captures = self.line.captures(line)?;
        let timestamp =
            NaiveDateTime::parse_from_str(captures.get(1)?.as_str(), TIMESTAMP_FORMAT).ok()?;
        let method = HttpMethod::from_token(captures.get(2)?.as_str())?;
        let url = captures.get(3)?.as_str().to_owned();
        let status = captures
            .get(4)?
            .as_str()
            .parse::<u16>()
            .ok()
            .filter(|code| STATUS_RANGE.contains(code))?;
        Some(RequestEvent {
            timestamp,
            method,
            url,
            status,
        })
    }

    /// Parses every line of `text`, preserving log order. A lone `\r` ends a
    /// line like `\n` does.
    #[must_use]
    pub fn parse_lines(&self, text: &str) -> Vec<RequestEvent> {
        text.split('\n')
            .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}
