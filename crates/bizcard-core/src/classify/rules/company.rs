//! Company name rule: fragments opening with an ASCII letter, upper-cased.

use super::Assignment;

pub fn matches(fragment: &str) -> bool {
    fragment
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Company names are stored upper-cased.
pub fn normalize(fragment: &str) -> String {
    fragment.to_uppercase()
}

pub fn apply(fragment: &str) -> Option<Assignment> {
    matches(fragment).then(|| Assignment::Company(normalize(fragment)))
}
