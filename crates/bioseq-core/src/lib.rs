//! Nucleotide sequence analysis: six-frame translation, ORF detection,
//! descriptive statistics and degenerate motif search.

pub mod codon;
pub mod config;
pub mod error;
pub mod operations;
pub mod orf;
pub mod search;
pub mod sequence;
pub mod stats;
pub mod translate;

pub use codon::GeneticCode;
pub use config::DetectorConfig;
pub use error::{BioSeqError, Result};
pub use orf::{overlapping_orfs, Orf, OrfDetector};
pub use search::{MotifFinder, MotifMatch};
pub use sequence::{NucleotideSequence, Nucleotides};
pub use stats::SequenceStats;
pub use translate::{ReadingFrame, SixFrames, Strand, Translator};
