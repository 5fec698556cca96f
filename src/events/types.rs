use chrono::NaiveDateTime;
use serde::Serialize;

/// Request verbs recognized by the log grammar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Maps a logged verb token; anything outside the fixed set is rejected.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Label appended to a feature key when reports split usage by verb.
    #[must_use]
    pub const fn verb_label(self) -> &'static str {
        match self {
            HttpMethod::Post | HttpMethod::Put => "modification",
            HttpMethod::Get => "lecture",
            HttpMethod::Delete => "deletion",
        }
    }
}

/// One parsed access-log line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestEvent {
    pub timestamp: NaiveDateTime,
    pub method: HttpMethod,
    pub url: String,
    pub status: u16,
}
