/// Canonical form used to compare a guess with a champion name.
///
/// Leading/trailing whitespace is dropped and letters are lowercased. This is
/// the only normalization applied to answers anywhere in the quiz.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns true when `candidate` names the same champion as `champion`.
#[must_use]
pub fn answers_match(candidate: &str, champion: &str) -> bool {
    normalize_answer(candidate) == normalize_answer(champion)
}
