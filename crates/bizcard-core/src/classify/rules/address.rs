//! Address fallback: trims the fragment and swaps `;` separators for `,`.

/// Applied to every fragment no other rule claimed.
pub fn normalize(fragment: &str) -> String {
    fragment.trim().replace(';', ",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_semicolons_become_commas() {
        assert_eq!(normalize("42; Lakeview Rd"), "42, Lakeview Rd");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(normalize("  12/7 North Street  "), "12/7 North Street");
    }
}
