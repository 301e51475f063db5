//! OCR collaborator boundary.
//!
//! The OCR engine itself lives outside this crate. What matters here is the
//! contract: a recognizer hands back text fragments in reading order
//! (top-to-bottom, left-to-right) with no guarantee of correctness or field
//! alignment — the classifier deals with whatever arrives.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// A source of recognized text fragments for a card image.
pub trait TextRecognizer {
    /// Recognize text on the image at `path`, in reading order.
    fn recognize(&self, path: &Path) -> Result<Vec<String>>;
}

/// Recognizer that replays a fixed fragment list regardless of input.
/// Stands in for a live OCR engine in tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticRecognizer {
    fragments: Vec<String>,
}

impl StaticRecognizer {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }
}

impl TextRecognizer for StaticRecognizer {
    fn recognize(&self, _path: &Path) -> Result<Vec<String>> {
        Ok(self.fragments.clone())
    }
}

/// Read fragments from a reader, one per line, preserving order. Lines that
/// are empty after trimming are skipped; everything else is kept verbatim.
pub fn read_fragments(reader: impl BufRead) -> Result<Vec<String>> {
    let mut fragments = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        fragments.push(line);
    }
    debug!("read {} fragments", fragments.len());
    Ok(fragments)
}

/// Read fragments from a plain-text file, one per line.
pub fn read_fragments_from_path(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_fragments(BufReader::new(file))
}
