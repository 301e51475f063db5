//! Core library for business-card OCR processing.
//!
//! This crate provides:
//! - The contact record model (nine fixed fields with an `"NA"` sentinel)
//! - Order-sensitive, rule-based field classification of recognized text
//! - The OCR collaborator boundary (fragment sources for images and text)

pub mod classify;
pub mod error;
pub mod models;
pub mod ocr;

pub use classify::{classify, Classification, FieldClassifier, RecordClassifier};
pub use error::{BizcardError, Result};
pub use models::config::BizcardConfig;
pub use models::record::{ContactRecord, Field, MISSING};
pub use ocr::{read_fragments, read_fragments_from_path, StaticRecognizer, TextRecognizer};
