//! Reading and writing sequence analysis data: FASTA ingestion and
//! CSV/TSV/JSON/FASTA export.

pub mod export;
pub mod fasta;

use std::path::PathBuf;

use thiserror::Error;

pub use export::{ExportError, ExportFormat};
pub use fasta::{FastaReport, Issue, IssueKind, ParseOptions};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("line {line}: {message}")]
    Strict { line: usize, message: String },
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
