//! Order-sensitive classifier mapping recognized fragments to contact fields.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::models::record::{ContactRecord, Field};

use super::rules::{self, Assignment};

/// Result of classifying one fragment sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The extracted record; every field populated, `"NA"` where nothing
    /// was assigned.
    pub record: ContactRecord,
    /// Non-fatal conditions encountered (degenerate input and the like).
    pub warnings: Vec<String>,
}

/// Trait for record classifiers.
pub trait RecordClassifier {
    /// Classify an ordered fragment sequence into a contact record.
    fn classify<S: AsRef<str>>(&self, fragments: &[S]) -> Classification;
}

/// Rule-based field classifier.
///
/// Positions 0 and 1 are assigned to name and designation unconditionally;
/// every later fragment runs through [`rules::RULES`] first-match-wins. Pure
/// function of its input: no shared state, safe to call from anywhere.
#[derive(Debug, Clone)]
pub struct FieldClassifier {
    /// Warn when the sequence is too short to fill both positional fields.
    warn_on_short_input: bool,
}

impl FieldClassifier {
    /// Create a classifier with default settings.
    pub fn new() -> Self {
        Self {
            warn_on_short_input: true,
        }
    }

    /// Set whether degenerate input (< 2 fragments) produces a warning.
    pub fn with_short_input_warning(mut self, warn: bool) -> Self {
        self.warn_on_short_input = warn;
        self
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordClassifier for FieldClassifier {
    fn classify<S: AsRef<str>>(&self, fragments: &[S]) -> Classification {
        let mut record = ContactRecord::na();
        let mut warnings = Vec::new();

        if fragments.is_empty() {
            if self.warn_on_short_input {
                warnings.push("no fragments recognized; all fields left as NA".to_string());
            }
            return Classification { record, warnings };
        }

        info!("classifying {} fragments", fragments.len());

        // Values collected per field, in encounter order. Contact numbers
        // accumulate separately into a single pre-joined string.
        let mut collected: BTreeMap<Field, Vec<String>> = BTreeMap::new();
        let mut contact = String::new();

        // Positions 0 and 1 are assigned unconditionally, no validation.
        collected
            .entry(Field::Name)
            .or_default()
            .push(fragments[0].as_ref().to_string());
        match fragments.get(1) {
            Some(designation) => collected
                .entry(Field::Designation)
                .or_default()
                .push(designation.as_ref().to_string()),
            None => {
                if self.warn_on_short_input {
                    warnings.push(
                        "only one fragment recognized; designation left as NA".to_string(),
                    );
                }
            }
        }

        for fragment in fragments.iter().skip(2) {
            match rules::classify_fragment(fragment.as_ref()) {
                Assignment::Contact(value) => {
                    if contact.is_empty() {
                        contact = value;
                    } else {
                        contact.push_str(" & ");
                        contact.push_str(&value);
                    }
                }
                Assignment::State { state, pincode } => {
                    collected.entry(Field::State).or_default().push(state);
                    if let Some(pincode) = pincode {
                        collected.entry(Field::Pincode).or_default().push(pincode);
                    }
                }
                Assignment::Email(value) => {
                    collected.entry(Field::Email).or_default().push(value)
                }
                Assignment::Website(value) => {
                    collected.entry(Field::Website).or_default().push(value)
                }
                Assignment::Pincode(value) => {
                    collected.entry(Field::Pincode).or_default().push(value)
                }
                Assignment::Company(value) => {
                    collected.entry(Field::CompanyName).or_default().push(value)
                }
                Assignment::Address(value) => {
                    collected.entry(Field::Address).or_default().push(value)
                }
            }
        }

        // Join collected values with a single space; fields nobody touched
        // keep the NA sentinel from the empty record.
        for (field, values) in collected {
            record.set(field, values.join(" "));
        }
        if !contact.is_empty() {
            record.set(Field::Contact, contact);
        }

        debug!("extracted record for {}", record.name);

        Classification { record, warnings }
    }
}

/// Classify fragments with default settings and return just the record.
pub fn classify<S: AsRef<str>>(fragments: &[S]) -> ContactRecord {
    FieldClassifier::new().classify(fragments).record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::MISSING;
    use pretty_assertions::assert_eq;

    fn classify_all(fragments: &[&str]) -> ContactRecord {
        classify(fragments)
    }

    #[test]
    fn test_full_card() {
        let record = classify_all(&[
            "Jane Doe",
            "Manager",
            "Acme Corp",
            "+1-555-123-4567",
            "555-987-6543",
            "jane@acme.com",
            "www.acme.com",
            "123 Main St",
            "600001",
        ]);

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.designation, "Manager");
        assert_eq!(record.company_name, "ACME CORP");
        assert_eq!(record.contact, "+1-555-123-4567 & 555-987-6543");
        assert_eq!(record.email, "jane@acme.com");
        assert_eq!(record.website, "www.acme.com");
        assert_eq!(record.address, "123 Main St");
        assert_eq!(record.pincode, "600001");
        assert_eq!(record.state, MISSING);
    }

    #[test]
    fn test_empty_input_yields_na_record() {
        let fragments: [&str; 0] = [];
        let classification = FieldClassifier::new().classify(&fragments);
        assert_eq!(classification.record, ContactRecord::na());
        assert_eq!(classification.warnings.len(), 1);
    }

    #[test]
    fn test_single_fragment_fills_name_only() {
        let classification = FieldClassifier::new().classify(&["Jane Doe"]);
        assert_eq!(classification.record.name, "Jane Doe");
        assert_eq!(classification.record.designation, MISSING);
        assert!(classification.warnings[0].contains("designation"));
    }

    #[test]
    fn test_short_input_warning_can_be_disabled() {
        let classifier = FieldClassifier::new().with_short_input_warning(false);
        let classification = classifier.classify(&["Jane Doe"]);
        assert!(classification.warnings.is_empty());
        assert_eq!(classification.record.designation, MISSING);
    }

    #[test]
    fn test_positional_fields_skip_validation() {
        // Whatever the first two fragments hold lands in name/designation,
        // even text the pattern rules would otherwise claim.
        let record = classify_all(&["+1-555-0000", "jane@acme.com", "Acme Corp"]);
        assert_eq!(record.name, "+1-555-0000");
        assert_eq!(record.designation, "jane@acme.com");
        assert_eq!(record.company_name, "ACME CORP");
        assert_eq!(record.contact, MISSING);
        assert_eq!(record.email, MISSING);
    }

    #[test]
    fn test_state_and_pincode_from_one_fragment() {
        let record = classify_all(&["Jane Doe", "Manager", "Madurai, Tamil Nadu 600042"]);
        assert_eq!(record.state, "Tamil Nadu");
        assert_eq!(record.pincode, "600042");
    }

    #[test]
    fn test_website_normalization() {
        let record = classify_all(&["Jane Doe", "Manager", "wwwacme.org"]);
        assert_eq!(record.website, "www.acme.org");
    }

    #[test]
    fn test_address_fallback_replaces_semicolons() {
        let record = classify_all(&["Jane Doe", "Manager", "42; Lakeview Rd"]);
        assert_eq!(record.address, "42, Lakeview Rd");
    }

    #[test]
    fn test_multi_valued_fields_join_with_space() {
        let record = classify_all(&[
            "Jane Doe",
            "Manager",
            "12/7 North Street;",
            "4th Cross;",
        ]);
        assert_eq!(record.address, "12/7 North Street, 4th Cross,");
    }

    #[test]
    fn test_no_field_is_ever_empty() {
        let record = classify_all(&["Jane Doe", "Manager"]);
        for (_, value) in record.fields() {
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let fragments = [
            "Jane Doe",
            "Manager",
            "Acme Corp",
            "+1-555-123-4567",
            "Chennai, TamilNadu",
        ];
        assert_eq!(classify(&fragments), classify(&fragments));
    }
}
