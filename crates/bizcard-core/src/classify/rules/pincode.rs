//! Pincode rule: the fragment is exactly six digits.

use super::patterns::PINCODE_EXACT;
use super::Assignment;

pub fn matches(fragment: &str) -> bool {
    PINCODE_EXACT.is_match(fragment)
}

pub fn apply(fragment: &str) -> Option<Assignment> {
    matches(fragment).then(|| Assignment::Pincode(fragment.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_six_digits_only() {
        assert!(matches("600001"));
        assert!(!matches("60001"));
        assert!(!matches("600 001"));
        assert!(!matches("600001 Chennai"));
    }
}
