//! Primitive match predicates shared by every filter dimension
//!
//! Two matchers cover all dimensions: exact equality for structured
//! fields (entity kind, severity, container name) and substring
//! containment for free-text fields (alert name, description). Both are
//! case-insensitive on both sides and total: no input can make them fail.

/// Case-insensitive equality against any member of `candidates`.
///
/// Empty `candidates` always returns `false`.
pub fn exact_match(value: &str, candidates: &[String]) -> bool {
    if candidates.is_empty() {
        return false;
    }
    let value = value.to_lowercase();
    candidates.iter().any(|c| value == c.to_lowercase())
}

/// Case-insensitive containment: `value` matches if it contains any
/// candidate as a substring.
///
/// Candidates are short free-text fragments, not full strings. Empty
/// `candidates` always returns `false`.
pub fn substring_match(value: &str, candidates: &[String]) -> bool {
    if candidates.is_empty() {
        return false;
    }
    let value = value.to_lowercase();
    candidates
        .iter()
        .any(|c| value.contains(&c.to_lowercase()))
}
