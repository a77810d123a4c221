use std::fmt;

/// Sample sequence submitted when the user does not provide one.
pub const DEFAULT_SEQUENCE: &str = "MGSSHHHHHHSSGLVPRGSHMRGPNPTAASLEASAGPFTVRSFTVSRPSGYGAGTVYYPTNAGGTVGAIAIVPGYTARQSSIKWWGPRLASHGFVVITIDTNSTLDQPSSRSSQQMAALRQVASLNGTSSSPIYGKVDTARMGVMGWSMGGGGSLISAANNPSLKAAAPQAPWDSSTNFSSVTVPTLIFACENDSIAPVNSSALPIYDSMSRNAKQFLEINGGSHSCANSGNSNQALIGKKGVAWMKRFMDNDTRYSTFACENPNSTRVSDFRTANCSLEDPAANKARKEAELAAATAEQ";

/// An amino-acid sequence in one-letter codes.
///
/// No alphabet or length validation is performed; the prediction service is the
/// authority on what it accepts. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residue letters in the sequence.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sequence {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Sequence {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// An opaque accession identifier (e.g. an MGnify `MGYP...` ID) used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProteinId(String);

impl ProteinId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProteinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProteinId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
