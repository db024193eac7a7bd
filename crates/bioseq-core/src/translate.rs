use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::codon::{GeneticCode, UNKNOWN_AMINO_ACID};
use crate::error::{BioSeqError, Result};
use crate::operations::reverse_complement;
use crate::sequence::Nucleotides;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    pub fn symbol(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Strand {
    type Error = BioSeqError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '+' => Ok(Strand::Forward),
            '-' => Ok(Strand::Reverse),
            other => Err(BioSeqError::InvalidStrand(other.to_string())),
        }
    }
}

impl FromStr for Strand {
    type Err = BioSeqError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Strand::try_from(c),
            _ => Err(BioSeqError::InvalidStrand(s.to_string())),
        }
    }
}

/// One of the six (strand, offset) reading frames.
///
/// Orders as `+1 +2 +3 -1 -2 -3`, the enumeration order used for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReadingFrame {
    strand: Strand,
    offset: u8,
}

impl ReadingFrame {
    pub const ALL: [ReadingFrame; 6] = [
        ReadingFrame { strand: Strand::Forward, offset: 0 },
        ReadingFrame { strand: Strand::Forward, offset: 1 },
        ReadingFrame { strand: Strand::Forward, offset: 2 },
        ReadingFrame { strand: Strand::Reverse, offset: 0 },
        ReadingFrame { strand: Strand::Reverse, offset: 1 },
        ReadingFrame { strand: Strand::Reverse, offset: 2 },
    ];

    pub fn new(strand: Strand, offset: usize) -> Result<Self> {
        if offset > 2 {
            return Err(BioSeqError::InvalidFrame(offset));
        }
        Ok(Self {
            strand,
            offset: offset as u8,
        })
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn offset(&self) -> usize {
        self.offset as usize
    }

    /// Label such as `+1` or `-3`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.strand, self.offset + 1)
    }
}

impl FromStr for ReadingFrame {
    type Err = BioSeqError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let strand = match chars.next() {
            Some(c) => Strand::try_from(c)?,
            None => return Err(BioSeqError::InvalidStrand(String::new())),
        };
        let number: usize = chars
            .as_str()
            .parse()
            .map_err(|_| BioSeqError::InvalidInput(format!("invalid frame label {s:?}")))?;
        if !(1..=3).contains(&number) {
            return Err(BioSeqError::InvalidInput(format!("frame label {s:?} out of range")));
        }
        ReadingFrame::new(strand, number - 1)
    }
}

/// Protein produced by one reading frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTranslation {
    pub frame: ReadingFrame,
    pub protein: String,
}

/// All six frame translations of a sequence, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixFrames(Vec<FrameTranslation>);

impl SixFrames {
    pub fn get(&self, frame: ReadingFrame) -> Option<&str> {
        self.0
            .iter()
            .find(|t| t.frame == frame)
            .map(|t| t.protein.as_str())
    }

    /// Look up a frame by label (`+1` .. `-3`).
    pub fn get_label(&self, label: &str) -> Option<&str> {
        let frame = label.parse::<ReadingFrame>().ok()?;
        self.get(frame)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameTranslation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for SixFrames {
    type Item = FrameTranslation;
    type IntoIter = std::vec::IntoIter<FrameTranslation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SixFrames {
    type Item = &'a FrameTranslation;
    type IntoIter = std::slice::Iter<'a, FrameTranslation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Codon-table translation of nucleotide sequences.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    code: GeneticCode,
}

impl Translator {
    pub fn new(code: GeneticCode) -> Self {
        Self { code }
    }

    pub fn genetic_code(&self) -> &GeneticCode {
        &self.code
    }

    /// Translate starting at `frame` (0, 1 or 2) on the sequence as given.
    ///
    /// A trailing partial codon is dropped; stop codons are kept as `*` and
    /// unknown codons become `X`.
    pub fn translate<S: Nucleotides + ?Sized>(&self, seq: &S, frame: usize) -> Result<String> {
        if frame > 2 {
            return Err(BioSeqError::InvalidFrame(frame));
        }
        Ok(self.translate_bases(seq.bases(), frame))
    }

    /// Translate a single reading frame, reverse complementing for `-` frames.
    pub fn translate_frame<S: Nucleotides + ?Sized>(&self, seq: &S, frame: ReadingFrame) -> String {
        match frame.strand() {
            Strand::Forward => self.translate_bases(seq.bases(), frame.offset()),
            Strand::Reverse => {
                self.translate_bases(&reverse_complement(seq.bases()), frame.offset())
            }
        }
    }

    pub fn translate_six_frames<S: Nucleotides + ?Sized>(&self, seq: &S) -> SixFrames {
        let forward = seq.bases();
        let reverse = reverse_complement(forward);

        let frames = ReadingFrame::ALL
            .iter()
            .map(|frame| {
                let bases = match frame.strand() {
                    Strand::Forward => forward,
                    Strand::Reverse => reverse.as_str(),
                };
                FrameTranslation {
                    frame: *frame,
                    protein: self.translate_bases(bases, frame.offset()),
                }
            })
            .collect();

        trace!("translated six frames of '{}' ({} bp)", seq.seq_id(), forward.len());
        SixFrames(frames)
    }

    fn translate_bases(&self, seq: &str, offset: usize) -> String {
        let bases: Vec<char> = seq.chars().map(|c| c.to_ascii_uppercase()).collect();
        if offset >= bases.len() {
            return String::new();
        }

        let mut protein = String::with_capacity((bases.len() - offset) / 3);
        for chunk in bases[offset..].chunks_exact(3) {
            let codon: String = chunk.iter().collect();
            let aa = if chunk.iter().all(char::is_ascii) {
                self.code.translate_codon(&codon)
            } else {
                UNKNOWN_AMINO_ACID
            };
            protein.push(aa);
        }

        protein
    }
}
