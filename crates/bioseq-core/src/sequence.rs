use serde::{Deserialize, Serialize};

use crate::error::{BioSeqError, Result};

/// Symbols accepted in a nucleotide sequence, in reporting order.
pub const ALPHABET: [char; 18] = [
    'A', 'C', 'G', 'T', 'U', 'N', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', '-', '.',
];

/// Identifier given to sequences built from a bare base string.
pub const ANONYMOUS_ID: &str = "anonymous";

pub fn is_valid_base(base: char) -> bool {
    ALPHABET.contains(&base.to_ascii_uppercase())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideSequence {
    id: String,
    #[serde(default)]
    description: String,
    sequence: String,
}

impl NucleotideSequence {
    /// Build a sequence from trusted input. Bases are upper-cased but not
    /// checked against [`ALPHABET`].
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            sequence: sequence.into().to_uppercase(),
        }
    }

    /// Build a sequence, rejecting any symbol outside [`ALPHABET`].
    pub fn try_new(id: impl Into<String>, sequence: impl Into<String>) -> Result<Self> {
        let seq = Self::new(id, sequence);
        if let Some((pos, bad)) = seq.sequence.char_indices().find(|(_, c)| !is_valid_base(*c)) {
            return Err(BioSeqError::InvalidInput(format!(
                "invalid nucleotide {bad:?} at position {pos} in sequence '{}'",
                seq.id
            )));
        }
        Ok(seq)
    }

    /// A sequence with the placeholder identifier, for bare base strings.
    pub fn anonymous(sequence: impl Into<String>) -> Self {
        Self::new(ANONYMOUS_ID, sequence)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Reverse complement as a new sequence carrying the same identifier.
    pub fn reverse_complement(&self) -> Self {
        Self {
            id: self.id.clone(),
            description: self.description.clone(),
            sequence: crate::operations::reverse_complement(&self.sequence),
        }
    }
}

/// Anything the translator and detectors can read bases from.
///
/// Implemented for bare strings (identified as [`ANONYMOUS_ID`]) and for
/// [`NucleotideSequence`].
pub trait Nucleotides {
    fn seq_id(&self) -> &str;
    fn bases(&self) -> &str;
}

impl Nucleotides for NucleotideSequence {
    fn seq_id(&self) -> &str {
        &self.id
    }

    fn bases(&self) -> &str {
        &self.sequence
    }
}

impl Nucleotides for str {
    fn seq_id(&self) -> &str {
        ANONYMOUS_ID
    }

    fn bases(&self) -> &str {
        self
    }
}

impl Nucleotides for String {
    fn seq_id(&self) -> &str {
        ANONYMOUS_ID
    }

    fn bases(&self) -> &str {
        self
    }
}

impl<T: Nucleotides + ?Sized> Nucleotides for &T {
    fn seq_id(&self) -> &str {
        (**self).seq_id()
    }

    fn bases(&self) -> &str {
        (**self).bases()
    }
}

impl From<&str> for NucleotideSequence {
    fn from(sequence: &str) -> Self {
        Self::anonymous(sequence)
    }
}

impl From<String> for NucleotideSequence {
    fn from(sequence: String) -> Self {
        Self::anonymous(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sequence() {
        let seq = NucleotideSequence::new("test", "atcgatcg");
        assert_eq!(seq.id(), "test");
        assert_eq!(seq.as_str(), "ATCGATCG");
        assert_eq!(seq.len(), 8);
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        assert!(NucleotideSequence::try_new("ok", "ACGTN-.ryswkmbdhvu").is_ok());
        let err = NucleotideSequence::try_new("bad", "ACGXT").unwrap_err();
        assert!(matches!(err, BioSeqError::InvalidInput(_)));
    }

    #[test]
    fn test_string_is_anonymous() {
        let raw = "ATG";
        assert_eq!(raw.seq_id(), ANONYMOUS_ID);
        assert_eq!(NucleotideSequence::from(raw).id(), ANONYMOUS_ID);
    }

    #[test]
    fn test_reverse_complement_keeps_id() {
        let seq = NucleotideSequence::new("s1", "ATGC");
        let rc = seq.reverse_complement();
        assert_eq!(rc.id(), "s1");
        assert_eq!(rc.as_str(), "GCAT");
    }
}
