//! Website rule: any fragment mentioning `www`, normalized to `www.`.

use super::Assignment;

pub fn matches(fragment: &str) -> bool {
    fragment.to_lowercase().contains("www")
}

/// Lowercase the fragment; if `www.` is not already present, insert the dot
/// after the first `www`.
pub fn normalize(fragment: &str) -> String {
    let site = fragment.to_lowercase();
    if site.contains("www.") {
        site
    } else {
        site.replacen("www", "www.", 1)
    }
}

pub fn apply(fragment: &str) -> Option<Assignment> {
    matches(fragment).then(|| Assignment::Website(normalize(fragment)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_any_case() {
        assert!(matches("www.acme.com"));
        assert!(matches("WWW.ACME.COM"));
        assert!(matches("wwwacme.org"));
        assert!(!matches("acme.org"));
    }

    #[test]
    fn test_normalize_inserts_missing_dot() {
        assert_eq!(normalize("wwwacme.org"), "www.acme.org");
        assert_eq!(normalize("WWWacme.org"), "www.acme.org");
    }

    #[test]
    fn test_normalize_keeps_existing_dot() {
        assert_eq!(normalize("WWW.Acme.Com"), "www.acme.com");
        assert_eq!(normalize("www.acme.com"), "www.acme.com");
    }
}
