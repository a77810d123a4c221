use phf::{Map, phf_map};

const UNKNOWN_RESIDUE: char = 'X';

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    "SEC" => 'U', "PYL" => 'O', "MSE" => 'M',
    "HSD" => 'H', "HSE" => 'H', "HSP" => 'H', "HID" => 'H', "HIE" => 'H', "HIP" => 'H',
    "ASX" => 'B', "GLX" => 'Z',
};

/// Maps a three-letter residue name to its one-letter code, `X` when unknown.
pub fn one_letter_code(residue_name: &str) -> char {
    let name = residue_name.trim().to_ascii_uppercase();
    ONE_LETTER_CODES
        .get(name.as_str())
        .copied()
        .unwrap_or(UNKNOWN_RESIDUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_letter_code_maps_standard_residues() {
        assert_eq!(one_letter_code("ALA"), 'A');
        assert_eq!(one_letter_code("TRP"), 'W');
        assert_eq!(one_letter_code("GLY"), 'G');
    }

    #[test]
    fn one_letter_code_handles_case_and_padding() {
        assert_eq!(one_letter_code(" met"), 'M');
    }

    #[test]
    fn one_letter_code_maps_histidine_variants_and_selenomethionine() {
        assert_eq!(one_letter_code("HSE"), 'H');
        assert_eq!(one_letter_code("HIP"), 'H');
        assert_eq!(one_letter_code("MSE"), 'M');
    }

    #[test]
    fn one_letter_code_falls_back_to_unknown() {
        assert_eq!(one_letter_code("HOH"), 'X');
        assert_eq!(one_letter_code(""), 'X');
    }
}
