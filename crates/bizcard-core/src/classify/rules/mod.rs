//! Ordered rule set for classifying card fragments.
//!
//! Rules are evaluated per fragment in the fixed order of [`RULES`]; the
//! first rule that claims a fragment wins and later rules never see it. A
//! fragment no rule claims falls through to the address rule, so
//! classification is total over any string.

pub mod address;
pub mod company;
pub mod contact;
pub mod email;
pub mod patterns;
pub mod pincode;
pub mod state;
pub mod website;

pub use state::{StateMatch, STATE_NAME};

use tracing::debug;

use crate::models::record::Field;

/// Outcome of classifying a single fragment, tagged with the target field
/// and carrying the value to store (already normalized where the rule
/// prescribes it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// Phone number, accumulated into a single ` & `-joined value.
    Contact(String),
    Email(String),
    /// Lowercased, with the dot inserted after `www` when missing.
    Website(String),
    /// State literal plus a pincode found in the same fragment, if any.
    State {
        state: String,
        pincode: Option<String>,
    },
    Pincode(String),
    /// Upper-cased company name.
    Company(String),
    /// Fallback: trimmed, `;` replaced with `,`.
    Address(String),
}

impl Assignment {
    /// The primary field this assignment feeds.
    pub fn field(&self) -> Field {
        match self {
            Assignment::Contact(_) => Field::Contact,
            Assignment::Email(_) => Field::Email,
            Assignment::Website(_) => Field::Website,
            Assignment::State { .. } => Field::State,
            Assignment::Pincode(_) => Field::Pincode,
            Assignment::Company(_) => Field::CompanyName,
            Assignment::Address(_) => Field::Address,
        }
    }
}

type Rule = fn(&str) -> Option<Assignment>;

/// Classification rules in priority order. The first rule returning an
/// assignment wins; the address fallback handles everything else.
pub const RULES: &[(&str, Rule)] = &[
    ("contact", contact::apply),
    ("email", email::apply),
    ("website", website::apply),
    ("state", state::apply),
    ("pincode", pincode::apply),
    ("company", company::apply),
];

/// Classify one fragment. Total: every fragment yields exactly one
/// assignment.
pub fn classify_fragment(fragment: &str) -> Assignment {
    for (name, rule) in RULES {
        if let Some(assignment) = rule(fragment) {
            debug!("fragment {:?} matched rule {}", fragment, name);
            return assignment;
        }
    }
    debug!("fragment {:?} fell through to address", fragment);
    Assignment::Address(address::normalize(fragment))
}
