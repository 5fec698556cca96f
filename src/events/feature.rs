/// Feature label shared by every flashcard route.
pub const FLASHCARD_FEATURE: &str = "users flashcards";

const HTTP_PREFIX: &str = "http://";

/// Classifies a logged URL into the functional area it targets.
///
/// Routes are assumed to alternate `/resource/{id}/subresource/{id}`: the
/// odd-indexed path segments are the route names and are joined with spaces.
/// Paths with a `.` anywhere after the first segment are static files and map
/// to the empty label, which every feature report ignores. Routes that break
/// the alternation produce whatever the parity rule yields.
#[must_use]
pub fn feature_key(url: &str) -> String {
    if url.contains("flash") {
        return FLASHCARD_FEATURE.to_owned();
    }
    let trimmed = url.trim();
    let path = trimmed.strip_prefix(HTTP_PREFIX).unwrap_or(trimmed).trim();
    let segments: Vec<&str> = path.split('/').collect();
    if segments
        .iter()
        .skip(1)
        .any(|segment| segment.contains('.'))
    {
        return String::new();
    }
    segments
        .iter()
        .skip(1)
        .step_by(2)
        .copied()
        .collect::<Vec<&str>>()
        .join(" ")
        .trim()
        .to_owned()
}
