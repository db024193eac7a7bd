use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BioSeqError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid ORF coordinates: start={start}, end={end} ({reason})")]
    InvalidCoordinate {
        start: usize,
        end: usize,
        reason: String,
    },
    #[error("Frame must be 0, 1 or 2, got {0}")]
    InvalidFrame(usize),
    #[error("Strand must be '+' or '-', got {0:?}")]
    InvalidStrand(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid motif: {0}")]
    InvalidMotif(String),
}

pub type Result<T> = std::result::Result<T, BioSeqError>;
