use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use bioseq_core::sequence::ALPHABET;
use bioseq_core::translate::FrameTranslation;
use bioseq_core::{MotifMatch, Orf, SequenceStats};
use thiserror::Error;

const FASTA_WIDTH: usize = 80;
const ORF_COLUMNS: [&str; 7] = ["seq_id", "start", "end", "frame", "strand", "length", "protein"];
const OVERLAP_COLUMNS: [&str; 8] = [
    "seq_id",
    "strand",
    "first_start",
    "first_end",
    "first_frame",
    "second_start",
    "second_end",
    "second_frame",
];
const MATCH_COLUMNS: [&str; 5] = ["seq_id", "position", "matched", "strand", "mismatches"];
const TRANSLATION_COLUMNS: [&str; 3] = ["seq_id", "frame", "protein"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{what} cannot be exported as {format}")]
    Unsupported { format: ExportFormat, what: &'static str },
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
    Fasta,
}

impl ExportFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" | "tab" | "txt" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            "fa" | "fasta" | "faa" | "fna" | "fsa" => Some(ExportFormat::Fasta),
            _ => None,
        }
    }

    fn delimiter(&self) -> u8 {
        match self {
            ExportFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Fasta => "fasta",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            "fasta" | "fa" => Ok(ExportFormat::Fasta),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

fn delimited_writer<W: Write>(writer: W, format: ExportFormat) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .from_writer(writer)
}

fn write_wrapped<W: Write>(writer: &mut W, text: &str) -> std::io::Result<()> {
    for chunk in text.as_bytes().chunks(FASTA_WIDTH) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn write_orfs<W: Write>(mut writer: W, orfs: &[Orf], format: ExportFormat) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let mut out = delimited_writer(writer, format);
            out.write_record(ORF_COLUMNS)?;
            for orf in orfs {
                out.serialize(orf)?;
            }
            out.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, orfs)?;
            writeln!(writer)?;
        }
        ExportFormat::Fasta => {
            for (n, orf) in orfs.iter().enumerate() {
                writeln!(
                    writer,
                    ">{}_orf{} start={} end={} strand={} frame={} length={}",
                    orf.seq_id(),
                    n + 1,
                    orf.start(),
                    orf.end(),
                    orf.strand(),
                    orf.frame(),
                    orf.length()
                )?;
                write_wrapped(&mut writer, orf.protein())?;
            }
        }
    }
    Ok(())
}

/// Overlapping ORF pairs, one row per pair. Both members share the strand
/// and, coming from one sequence, the id.
pub fn write_overlaps<W: Write>(
    mut writer: W,
    pairs: &[(&Orf, &Orf)],
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let mut out = delimited_writer(writer, format);
            out.write_record(OVERLAP_COLUMNS)?;
            for (a, b) in pairs {
                out.write_record([
                    a.seq_id().to_string(),
                    a.strand().to_string(),
                    a.start().to_string(),
                    a.end().to_string(),
                    a.frame().to_string(),
                    b.start().to_string(),
                    b.end().to_string(),
                    b.frame().to_string(),
                ])?;
            }
            out.flush()?;
        }
        ExportFormat::Json => {
            let rows: Vec<serde_json::Value> = pairs
                .iter()
                .map(|(a, b)| serde_json::json!({ "first": a, "second": b }))
                .collect();
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
        ExportFormat::Fasta => {
            return Err(ExportError::Unsupported {
                format,
                what: "overlapping ORF pairs",
            })
        }
    }
    Ok(())
}

pub fn write_matches<W: Write>(
    mut writer: W,
    matches: &[MotifMatch],
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let mut out = delimited_writer(writer, format);
            out.write_record(MATCH_COLUMNS)?;
            for m in matches {
                out.serialize(m)?;
            }
            out.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, matches)?;
            writeln!(writer)?;
        }
        ExportFormat::Fasta => {
            return Err(ExportError::Unsupported {
                format,
                what: "motif matches",
            })
        }
    }
    Ok(())
}

/// Statistics table: id, length, GC percent, then one count column per
/// alphabet symbol.
pub fn write_stats<W: Write>(
    mut writer: W,
    stats: &[SequenceStats],
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let mut out = delimited_writer(writer, format);
            let mut header = vec!["seq_id".to_string(), "length".to_string(), "gc_percent".to_string()];
            header.extend(ALPHABET.iter().map(|b| b.to_string()));
            out.write_record(&header)?;

            for s in stats {
                let mut row = vec![s.seq_id.clone(), s.length.to_string(), format!("{:.2}", s.gc_percent)];
                row.extend(s.base_counts.iter().map(|(_, n)| n.to_string()));
                out.write_record(&row)?;
            }
            out.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, stats)?;
            writeln!(writer)?;
        }
        ExportFormat::Fasta => {
            return Err(ExportError::Unsupported {
                format,
                what: "sequence statistics",
            })
        }
    }
    Ok(())
}

/// Frame translations keyed by sequence id.
pub fn write_translations<W: Write>(
    mut writer: W,
    translations: &[(String, Vec<FrameTranslation>)],
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let mut out = delimited_writer(writer, format);
            out.write_record(TRANSLATION_COLUMNS)?;
            for (seq_id, frames) in translations {
                for t in frames {
                    out.write_record([seq_id.as_str(), t.frame.label().as_str(), t.protein.as_str()])?;
                }
            }
            out.flush()?;
        }
        ExportFormat::Json => {
            let rows: Vec<serde_json::Value> = translations
                .iter()
                .map(|(seq_id, frames)| {
                    let proteins: serde_json::Map<String, serde_json::Value> = frames
                        .iter()
                        .map(|t| (t.frame.label(), serde_json::Value::from(t.protein.as_str())))
                        .collect();
                    serde_json::json!({ "seq_id": seq_id, "frames": proteins })
                })
                .collect();
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
        ExportFormat::Fasta => {
            for (seq_id, frames) in translations {
                for t in frames {
                    writeln!(writer, ">{} frame={}", seq_id, t.frame)?;
                    write_wrapped(&mut writer, &t.protein)?;
                }
            }
        }
    }
    Ok(())
}
