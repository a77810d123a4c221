use crate::core::models::structure::{ConfidenceSummary, ResidueConfidence};
use crate::core::utils::residues::one_letter_code;
use std::collections::HashMap;
use thiserror::Error;

const CONFIDENCE_DECIMALS: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Payload contains no ATOM/HETATM records; not a recognizable PDB structure")]
    NoAtomRecords,

    #[error("Atom record on line {line} has no confidence value in columns 61-66")]
    MissingConfidence { line: usize },

    #[error("Invalid confidence value on line {line} in columns 61-66 (value: '{value}')")]
    InvalidConfidence { line: usize, value: String },

    #[error("Invalid residue number on line {line} in columns 23-26 (value: '{value}')")]
    InvalidResidueNumber { line: usize, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ResidueKey {
    chain_id: char,
    residue_number: isize,
    insertion_code: Option<char>,
}

struct ResidueAccumulator {
    key: ResidueKey,
    residue_name: String,
    atom_confidences: Vec<f64>,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

/// Mean of `values`, summed in sorted order so the result does not depend on
/// record order.
fn order_independent_mean(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds on the exact decimal expansion of `value`, so `2.00005` (stored just
/// below the midpoint) becomes `2.0` rather than `2.0001`.
fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Per-residue view of the first model in a PDB payload.
///
/// The confidence of each residue is read from the B-factor field, which is where
/// structure predictors store plDDT.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbStructure {
    residues: Vec<ResidueConfidence>,
}

impl PdbStructure {
    /// Parses the `ATOM`/`HETATM` records of the first model.
    ///
    /// Atoms are grouped into residues by chain, residue number and insertion code;
    /// a residue's confidence is the mean of its atoms' B-factors. Residues are kept
    /// in order of first appearance.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoAtomRecords`] when the payload has no atom records,
    /// and a line-specific error when an atom record has no usable confidence or
    /// residue number.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut accumulators: Vec<ResidueAccumulator> = Vec::new();
        let mut index: HashMap<ResidueKey, usize> = HashMap::new();

        for (line_num, line) in text.lines().enumerate() {
            let line_num = line_num + 1;
            let record_type = slice_and_trim(line, 0, 6);

            match record_type {
                "ENDMDL" => break,
                "ATOM" | "HETATM" => {}
                _ => continue,
            }

            let res_name = slice_and_trim(line, 17, 20);
            let chain_id = slice_and_trim(line, 21, 22).chars().next().unwrap_or(' ');
            let res_seq_str = slice_and_trim(line, 22, 26);
            let insertion_code = slice_and_trim(line, 26, 27).chars().next();
            let b_factor_str = slice_and_trim(line, 60, 66);

            let residue_number: isize =
                res_seq_str
                    .parse()
                    .map_err(|_| ParseError::InvalidResidueNumber {
                        line: line_num,
                        value: res_seq_str.to_string(),
                    })?;

            if b_factor_str.is_empty() {
                return Err(ParseError::MissingConfidence { line: line_num });
            }
            let b_factor: f64 = b_factor_str
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite())
                .ok_or_else(|| ParseError::InvalidConfidence {
                    line: line_num,
                    value: b_factor_str.to_string(),
                })?;

            let key = ResidueKey {
                chain_id,
                residue_number,
                insertion_code,
            };
            let slot = *index.entry(key).or_insert_with(|| {
                accumulators.push(ResidueAccumulator {
                    key,
                    residue_name: res_name.to_string(),
                    atom_confidences: Vec::new(),
                });
                accumulators.len() - 1
            });
            accumulators[slot].atom_confidences.push(b_factor);
        }

        if accumulators.is_empty() {
            return Err(ParseError::NoAtomRecords);
        }

        let residues = accumulators
            .into_iter()
            .map(|mut acc| ResidueConfidence {
                chain_id: acc.key.chain_id,
                residue_number: acc.key.residue_number,
                insertion_code: acc.key.insertion_code,
                residue_name: acc.residue_name,
                confidence: order_independent_mean(&mut acc.atom_confidences),
            })
            .collect();

        Ok(Self { residues })
    }

    pub fn residues(&self) -> &[ResidueConfidence] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Chain identifiers in order of first appearance.
    pub fn chain_ids(&self) -> Vec<char> {
        let mut chains = Vec::new();
        for residue in &self.residues {
            if !chains.contains(&residue.chain_id) {
                chains.push(residue.chain_id);
            }
        }
        chains
    }

    /// One-letter sequence of the modelled residues; unknown residues read as `X`.
    pub fn sequence(&self) -> String {
        self.residues
            .iter()
            .map(|r| one_letter_code(&r.residue_name))
            .collect()
    }

    pub fn confidence_summary(&self) -> ConfidenceSummary {
        let mut confidences: Vec<f64> = self.residues.iter().map(|r| r.confidence).collect();
        ConfidenceSummary {
            mean: round_to_decimals(
                order_independent_mean(&mut confidences),
                CONFIDENCE_DECIMALS,
            ),
            residue_count: self.residues.len(),
        }
    }
}

/// Mean per-residue confidence of a PDB payload, rounded to 4 decimal digits.
pub fn mean_confidence(structure_text: &str) -> Result<ConfidenceSummary, ParseError> {
    Ok(PdbStructure::parse(structure_text)?.confidence_summary())
}

#[cfg(test)]
pub(crate) mod test_utils {
    /// Formats a fixed-column PDB ATOM record.
    pub fn atom_line(
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: isize,
        b_factor: f64,
    ) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}           {}",
            serial,
            name,
            res_name,
            chain,
            res_seq,
            1.0,
            2.0,
            3.0,
            1.0,
            b_factor,
            &name[..1]
        )
    }

    /// A payload with two atoms per residue, all on chain A.
    pub fn structure_with_confidences(confidences: &[f64]) -> String {
        let mut lines = vec!["HEADER    PREDICTED STRUCTURE".to_string()];
        let mut serial = 1;
        for (i, &plddt) in confidences.iter().enumerate() {
            let res_seq = i as isize + 1;
            lines.push(atom_line(serial, "N", "ALA", 'A', res_seq, plddt));
            lines.push(atom_line(serial + 1, "CA", "ALA", 'A', res_seq, plddt));
            serial += 2;
        }
        lines.push("TER".to_string());
        lines.push("END".to_string());
        lines.join("\n")
    }
}
