use serde::Serialize;
use std::fmt;

/// Raw PDB text returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructurePayload {
    text: String,
}

impl StructurePayload {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Mean per-residue confidence (plDDT) of a structure, rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceSummary {
    pub mean: f64,
    pub residue_count: usize,
}

impl fmt::Display for ConfidenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing `.0` on whole numbers (25.0 rather than 25).
        write!(f, "{:?}", self.mean)
    }
}

/// Confidence of a single residue, averaged over its atoms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidueConfidence {
    pub chain_id: char,
    pub residue_number: isize,
    pub insertion_code: Option<char>,
    pub residue_name: String,
    pub confidence: f64,
}
