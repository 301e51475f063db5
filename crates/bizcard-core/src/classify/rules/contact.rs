//! Contact number rule: leading `+` or dash-separated digit runs.

use super::Assignment;

/// A fragment is a contact number if it starts with `+`, or if stripping
/// every `-` leaves a nonempty all-digit string and at least one `-` was
/// present.
pub fn matches(fragment: &str) -> bool {
    if fragment.starts_with('+') {
        return true;
    }
    if !fragment.contains('-') {
        return false;
    }
    let digits: String = fragment.chars().filter(|c| *c != '-').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn apply(fragment: &str) -> Option<Assignment> {
    matches(fragment).then(|| Assignment::Contact(fragment.to_string()))
}
