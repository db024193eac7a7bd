use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bioseq_core::sequence::{is_valid_base, NucleotideSequence, ANONYMOUS_ID};
use log::{debug, warn};
use nom::bytes::complete::take_till;
use nom::character::complete::{char, space0};
use nom::sequence::{delimited, preceded};
use nom::IResult;
use serde::Serialize;

use crate::ParseError;

/// How strictly malformed input is treated. Issues of a class that is not
/// strict are collected in the report and parsing continues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail on header/record structure problems.
    pub strict_structure: bool,
    /// Fail on invalid characters inside sequence lines.
    pub strict_sequence: bool,
}

impl ParseOptions {
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            strict_structure: true,
            strict_sequence: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyInput,
    MissingHeader,
    EmptyHeader,
    EmptyRecord,
    InvalidNucleotide,
    EmbeddedWhitespace,
}

impl IssueKind {
    pub fn is_structural(&self) -> bool {
        !matches!(self, IssueKind::InvalidNucleotide | IssueKind::EmbeddedWhitespace)
    }
}

/// A problem found while parsing, tied to a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub line: usize,
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastaReport {
    pub records: Vec<NucleotideSequence>,
    pub issues: Vec<Issue>,
}

impl FastaReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Human-readable parse summary.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Parsed {} record(s) with {} issue(s)",
            self.records.len(),
            self.issues.len()
        );
        for issue in &self.issues {
            out.push_str("\n  ");
            out.push_str(&issue.to_string());
        }
        out
    }

    fn push(&mut self, issue: Issue, options: &ParseOptions) -> Result<(), ParseError> {
        let strict = if issue.kind.is_structural() {
            options.strict_structure
        } else {
            options.strict_sequence
        };
        if strict {
            return Err(ParseError::Strict {
                line: issue.line,
                message: issue.message,
            });
        }
        warn!("{issue}");
        self.issues.push(issue);
        Ok(())
    }
}

struct PendingRecord {
    id: String,
    description: String,
    line: usize,
    sequence: String,
}

/// `>id description`; the description may be empty.
fn header(line: &str) -> IResult<&str, &str> {
    preceded(
        char('>'),
        delimited(space0, take_till(|c: char| c.is_whitespace()), space0),
    )(line)
}

/// Check that a path names a non-empty regular file.
pub fn validate_input_path(path: impl AsRef<Path>) -> Result<PathBuf, ParseError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ParseError::NotAFile(path.to_path_buf()));
    }
    if fs::metadata(path)?.len() == 0 {
        return Err(ParseError::EmptyFile(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<FastaReport, ParseError> {
    let path = validate_input_path(path)?;
    debug!("reading FASTA from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_str(&content, options)
}

/// Parse FASTA text into records, collecting or failing on issues per
/// `options`.
pub fn parse_str(input: &str, options: &ParseOptions) -> Result<FastaReport, ParseError> {
    let mut report = FastaReport::default();

    if input.trim().is_empty() {
        let message = if input.is_empty() {
            "input is empty"
        } else {
            "input contains only whitespace"
        };
        report.push(
            Issue {
                line: 1,
                kind: IssueKind::EmptyInput,
                message: message.to_string(),
            },
            options,
        )?;
        return Ok(report);
    }

    let mut current: Option<PendingRecord> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('>') {
            if let Some(done) = current.take() {
                finish_record(done, &mut report, options)?;
            }

            let (description, id) = header(trimmed)
                .map_err(|e| ParseError::InvalidFormat(format!("line {line}: {e}")))?;
            let id = if id.is_empty() {
                report.push(
                    Issue {
                        line,
                        kind: IssueKind::EmptyHeader,
                        message: format!("header without identifier on line {line}"),
                    },
                    options,
                )?;
                format!("unnamed_{line}")
            } else {
                id.to_string()
            };

            current = Some(PendingRecord {
                id,
                description: description.trim_end().to_string(),
                line,
                sequence: String::new(),
            });
            continue;
        }

        if current.is_none() {
            report.push(
                Issue {
                    line,
                    kind: IssueKind::MissingHeader,
                    message: format!("sequence data found before header on line {line}"),
                },
                options,
            )?;
        }
        let record = current.get_or_insert_with(|| PendingRecord {
            id: ANONYMOUS_ID.to_string(),
            description: String::new(),
            line,
            sequence: String::new(),
        });

        if trimmed.chars().any(|c| c.is_whitespace()) {
            report.push(
                Issue {
                    line,
                    kind: IssueKind::EmbeddedWhitespace,
                    message: format!(
                        "whitespace inside sequence '{}' on line {line}",
                        record.id
                    ),
                },
                options,
            )?;
        }

        let upper: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let invalid: String = upper.chars().filter(|c| !is_valid_base(*c)).collect();
        if !invalid.is_empty() {
            report.push(
                Issue {
                    line,
                    kind: IssueKind::InvalidNucleotide,
                    message: format!(
                        "invalid nucleotide(s) {invalid:?} in sequence '{}' on line {line}",
                        record.id
                    ),
                },
                options,
            )?;
        }
        record
            .sequence
            .extend(upper.chars().filter(|c| is_valid_base(*c)));
    }

    if let Some(done) = current.take() {
        finish_record(done, &mut report, options)?;
    }

    debug!(
        "parsed {} FASTA record(s), {} issue(s)",
        report.records.len(),
        report.issues.len()
    );
    Ok(report)
}

fn finish_record(
    record: PendingRecord,
    report: &mut FastaReport,
    options: &ParseOptions,
) -> Result<(), ParseError> {
    if record.sequence.is_empty() {
        return report.push(
            Issue {
                line: record.line,
                kind: IssueKind::EmptyRecord,
                message: format!(
                    "record '{}' starting on line {} has an empty sequence",
                    record.id, record.line
                ),
            },
            options,
        );
    }

    report.records.push(
        NucleotideSequence::new(record.id, record.sequence).with_description(record.description),
    );
    Ok(())
}

/// Serialize sequences to FASTA format
pub fn serialize(sequences: &[NucleotideSequence]) -> String {
    let mut out = String::new();

    for seq in sequences {
        // Header
        out.push('>');
        out.push_str(seq.id());
        if !seq.description().is_empty() {
            out.push(' ');
            out.push_str(seq.description());
        }
        out.push('\n');

        // Sequence in 80-character lines
        for chunk in seq.as_str().as_bytes().chunks(80) {
            out.push_str(&String::from_utf8_lossy(chunk));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lenient(input: &str) -> FastaReport {
        parse_str(input, &ParseOptions::lenient()).unwrap()
    }

    #[test]
    fn test_parse_single_sequence() {
        let input = ">seq1 A test sequence\nATCGATCG\nggccttaa\n";
        let report = lenient(input);
        assert_eq!(report.len(), 1);
        assert!(!report.has_issues());
        assert_eq!(report.records[0].id(), "seq1");
        assert_eq!(report.records[0].description(), "A test sequence");
        assert_eq!(report.records[0].as_str(), "ATCGATCGGGCCTTAA");
    }

    #[test]
    fn test_parse_multi_sequence() {
        let input = ">seq1\nATCG\n\n>seq2\nGGCC\n; comment\n>seq3\nTTAA\n";
        let report = lenient(input);
        let seqs: Vec<&str> = report.records.iter().map(|s| s.as_str()).collect();
        assert_eq!(seqs, vec!["ATCG", "GGCC", "TTAA"]);
    }

    #[test]
    fn test_header_parser() {
        assert_eq!(header(">id desc here"), Ok(("desc here", "id")));
        assert_eq!(header(">  id"), Ok(("", "id")));
        assert_eq!(header(">"), Ok(("", "")));
        assert!(header("id").is_err());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        for (input, expected) in [
            ("", "input is empty"),
            ("   ", "input contains only whitespace"),
            (" \t\r\n ", "input contains only whitespace"),
        ] {
            let report = lenient(input);
            assert!(report.is_empty());
            assert_eq!(report.issues.len(), 1);
            assert_eq!(report.issues[0].kind, IssueKind::EmptyInput);
            assert_eq!(report.issues[0].message, expected);
        }
        assert!(parse_str("", &ParseOptions::strict()).is_err());
    }

    #[test]
    fn test_sequence_before_header() {
        let report = lenient("ACGTACGT\n>next\nAAA\n");
        assert_eq!(report.len(), 2);
        assert_eq!(report.records[0].id(), ANONYMOUS_ID);
        assert_eq!(report.issues[0].kind, IssueKind::MissingHeader);

        let strict = ParseOptions {
            strict_structure: true,
            ..Default::default()
        };
        assert!(matches!(
            parse_str("ACGT", &strict),
            Err(ParseError::Strict { line: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_nucleotides_lenient() {
        let report = lenient(">seq1\nACXGTZ\n");
        assert_eq!(report.records[0].as_str(), "ACGT");
        let issue = &report.issues[0];
        assert_eq!(issue.kind, IssueKind::InvalidNucleotide);
        assert_eq!(issue.line, 2);
        assert!(issue.message.contains("invalid nucleotide"));
        assert!(issue.message.contains("line 2"));
    }

    #[test]
    fn test_invalid_nucleotides_strict_sequence() {
        let options = ParseOptions {
            strict_sequence: true,
            ..Default::default()
        };
        let err = parse_str(">seq1\nACGT\nACXT\n", &options).unwrap_err();
        assert!(matches!(err, ParseError::Strict { line: 3, .. }));
        // structure problems are still tolerated
        assert!(parse_str("ACGT\n", &options).is_ok());
    }

    #[test]
    fn test_embedded_whitespace() {
        let report = lenient(">s\nAC GT\n");
        assert_eq!(report.records[0].as_str(), "ACGT");
        assert_eq!(report.issues[0].kind, IssueKind::EmbeddedWhitespace);
    }

    #[test]
    fn test_empty_records_and_headers() {
        let report = lenient(">empty\n>\nACGT\n");
        assert_eq!(report.len(), 1);
        assert_eq!(report.records[0].id(), "unnamed_2");
        let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::EmptyRecord, IssueKind::EmptyHeader]);
    }

    #[test]
    fn test_non_fasta_text() {
        let report = lenient("hello world");
        assert!(report.has_issues());
        assert!(parse_str("hello world", &ParseOptions::strict()).is_err());
    }

    #[test]
    fn test_one_base_per_record() {
        let bases = "ACGTNRYKMSWBDHV";
        let input: String = bases
            .chars()
            .enumerate()
            .map(|(i, b)| format!(">seq{i}\n{b}\n"))
            .collect();
        let report = lenient(&input);
        let parsed: String = report.records.iter().map(|s| s.as_str()).collect();
        assert_eq!(parsed, bases);
    }

    #[test]
    fn test_roundtrip() {
        let long = "ACGT".repeat(50);
        let input = format!(">test A test\n{long}\n");
        let report = lenient(&input);
        let serialized = serialize(&report.records);
        assert!(serialized.lines().skip(1).all(|l| l.len() <= 80));
        let reparsed = lenient(&serialized);
        assert_eq!(report.records, reparsed.records);
    }

    #[test]
    fn test_summary() {
        let report = lenient(">s\nACXT\n");
        let summary = report.summary();
        assert!(summary.starts_with("Parsed 1 record(s) with 1 issue(s)"));
        assert!(summary.contains("line 2:"));
    }
}
