//! Common regex patterns for card field classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Indian postal code: the whole fragment is exactly six digits
    pub static ref PINCODE_EXACT: Regex = Regex::new(r"^\d{6}$").unwrap();

    // Six-digit run inside a longer fragment (word-boundary bounded)
    pub static ref PINCODE_EMBEDDED: Regex = Regex::new(r"\b\d{6}\b").unwrap();
}
