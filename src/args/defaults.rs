use std::path::PathBuf;

/// Access log written by the API server, relative to the working directory.
pub(crate) const DEFAULT_LOG_FILE: &str = "logs_app.log";
/// Entries kept by the least/most used feature rankings.
pub(crate) const DEFAULT_TOP_N: usize = 5;

pub(crate) fn default_charts_path() -> String {
    default_base_dir()
        .join("charts")
        .to_string_lossy()
        .into_owned()
}

fn default_base_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(".universe-insights");
    }

    PathBuf::from(".universe-insights")
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
    }

    if let Some(value) = std::env::var_os("HOME") {
        return Some(PathBuf::from(value));
    }

    None
}
