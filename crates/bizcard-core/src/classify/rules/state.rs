//! State rule: literal Tamil Nadu mentions, with an embedded pincode scan.

use super::patterns::PINCODE_EMBEDDED;
use super::Assignment;

/// Canonical state value stored regardless of how the card spells it.
pub const STATE_NAME: &str = "Tamil Nadu";

/// A state mention found in a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMatch {
    /// Always [`STATE_NAME`].
    pub state: &'static str,
    /// Six-digit pincode printed in the same fragment, if any.
    pub pincode: Option<String>,
}

/// Match the literal spellings `Tamil Nadu` and `TamilNadu` (case-sensitive).
/// The same fragment is also searched for a word-bounded six-digit run, which
/// feeds the pincode field.
pub fn extract(fragment: &str) -> Option<StateMatch> {
    if !fragment.contains("Tamil Nadu") && !fragment.contains("TamilNadu") {
        return None;
    }
    let pincode = PINCODE_EMBEDDED
        .find(fragment)
        .map(|m| m.as_str().to_string());
    Some(StateMatch {
        state: STATE_NAME,
        pincode,
    })
}

pub fn apply(fragment: &str) -> Option<Assignment> {
    extract(fragment).map(|m| Assignment::State {
        state: m.state.to_string(),
        pincode: m.pincode,
    })
}
