use std::collections::HashMap;

use crate::error::{BioSeqError, Result};

/// Symbol emitted for codons missing from the table.
pub const UNKNOWN_AMINO_ACID: char = 'X';
/// Symbol emitted for stop codons.
pub const STOP_SYMBOL: char = '*';

const STANDARD_CODONS: [(&str, char); 64] = [
    ("TTT", 'F'), ("TTC", 'F'), ("TTA", 'L'), ("TTG", 'L'),
    ("CTT", 'L'), ("CTC", 'L'), ("CTA", 'L'), ("CTG", 'L'),
    ("ATT", 'I'), ("ATC", 'I'), ("ATA", 'I'), ("ATG", 'M'),
    ("GTT", 'V'), ("GTC", 'V'), ("GTA", 'V'), ("GTG", 'V'),
    ("TCT", 'S'), ("TCC", 'S'), ("TCA", 'S'), ("TCG", 'S'),
    ("CCT", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
    ("ACT", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
    ("GCT", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
    ("TAT", 'Y'), ("TAC", 'Y'), ("TAA", '*'), ("TAG", '*'),
    ("CAT", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
    ("AAT", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
    ("GAT", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
    ("TGT", 'C'), ("TGC", 'C'), ("TGA", '*'), ("TGG", 'W'),
    ("CGT", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
    ("AGT", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
    ("GGT", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
];

/// Immutable codon table handed to the translator.
///
/// Stop codons are every codon mapped to [`STOP_SYMBOL`]; start codons are
/// informational only, ORF scanning keys on the translated `M`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    name: String,
    id: u8,
    table: HashMap<String, char>,
    start_codons: Vec<String>,
    stop_codons: Vec<String>,
}

impl GeneticCode {
    /// Build a code from an explicit codon table.
    pub fn new(
        name: impl Into<String>,
        id: u8,
        table: HashMap<String, char>,
        start_codons: Vec<String>,
    ) -> Self {
        let table: HashMap<String, char> = table
            .into_iter()
            .map(|(codon, aa)| (codon.to_uppercase(), aa))
            .collect();
        let mut stop_codons: Vec<String> = table
            .iter()
            .filter(|(_, aa)| **aa == STOP_SYMBOL)
            .map(|(codon, _)| codon.clone())
            .collect();
        stop_codons.sort();

        GeneticCode {
            name: name.into(),
            id,
            table,
            start_codons: start_codons.iter().map(|c| c.to_uppercase()).collect(),
            stop_codons,
        }
    }

    /// Standard genetic code (NCBI table 1)
    pub fn standard() -> Self {
        let table = STANDARD_CODONS
            .iter()
            .map(|(codon, aa)| (codon.to_string(), *aa))
            .collect();
        Self::new("Standard", 1, table, vec!["ATG".to_string()])
    }

    /// Bacterial/archaeal genetic code (NCBI table 11)
    pub fn bacterial() -> Self {
        // Same amino acids as the standard code, more start codons
        let mut code = Self::standard();
        code.name = "Bacterial/Archaeal".to_string();
        code.id = 11;
        code.start_codons = ["ATG", "GTG", "TTG", "CTG", "ATT", "ATC", "ATA"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        code
    }

    /// Look up a built-in code by NCBI table id.
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Self::standard()),
            11 => Ok(Self::bacterial()),
            other => Err(BioSeqError::InvalidConfig(format!(
                "unsupported genetic code table {other} (expected 1 or 11)"
            ))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Translate a single codon to an amino acid
    pub fn translate_codon(&self, codon: &str) -> char {
        self.table
            .get(&codon.to_uppercase())
            .copied()
            .unwrap_or(UNKNOWN_AMINO_ACID)
    }

    pub fn contains(&self, codon: &str) -> bool {
        self.table.contains_key(&codon.to_uppercase())
    }

    pub fn is_start_codon(&self, codon: &str) -> bool {
        self.start_codons.contains(&codon.to_uppercase())
    }

    pub fn is_stop_codon(&self, codon: &str) -> bool {
        self.stop_codons.contains(&codon.to_uppercase())
    }

    pub fn start_codons(&self) -> &[String] {
        &self.start_codons
    }

    pub fn stop_codons(&self) -> &[String] {
        &self.stop_codons
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = GeneticCode::standard();
        assert_eq!(table.len(), 64);
        assert_eq!(table.translate_codon("ATG"), 'M');
        assert_eq!(table.translate_codon("atg"), 'M');
        assert_eq!(table.translate_codon("TAA"), '*');
        assert_eq!(table.translate_codon("GCT"), 'A');
        assert_eq!(table.translate_codon("XXX"), 'X');
        assert_eq!(table.translate_codon("ANG"), 'X');
    }

    #[test]
    fn test_start_stop_codons() {
        let table = GeneticCode::standard();
        assert!(table.is_start_codon("ATG"));
        assert!(!table.is_start_codon("AAA"));
        assert_eq!(table.stop_codons(), ["TAA", "TAG", "TGA"]);
        assert!(table.is_stop_codon("tga"));
    }

    #[test]
    fn test_bacterial_table() {
        let table = GeneticCode::bacterial();
        assert_eq!(table.id(), 11);
        assert!(table.is_start_codon("GTG"));
        assert!(table.is_start_codon("TTG"));
        assert_eq!(table.translate_codon("GTG"), 'V');
    }

    #[test]
    fn test_from_id() {
        assert_eq!(GeneticCode::from_id(1).unwrap().name(), "Standard");
        assert!(matches!(
            GeneticCode::from_id(4),
            Err(BioSeqError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_custom_code_derives_stops() {
        let mut table: HashMap<String, char> = STANDARD_CODONS
            .iter()
            .map(|(c, aa)| (c.to_string(), *aa))
            .collect();
        // Vertebrate mitochondrial reassignments
        table.insert("TGA".to_string(), 'W');
        table.insert("AGA".to_string(), '*');
        table.insert("AGG".to_string(), '*');
        let code = GeneticCode::new("Vertebrate Mitochondrial", 2, table, vec!["ATG".into()]);
        assert_eq!(code.stop_codons(), ["AGA", "AGG", "TAA", "TAG"]);
        assert_eq!(code.translate_codon("TGA"), 'W');
    }
}
