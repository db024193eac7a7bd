use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{BioSeqError, Result};
use crate::operations::reverse_complement;
use crate::sequence::Nucleotides;
use crate::translate::Strand;

/// IUPAC nucleotide codes and the bases each one stands for.
pub const IUPAC_CODES: [(char, &str); 15] = [
    ('A', "A"),
    ('C', "C"),
    ('G', "G"),
    ('T', "T"),
    ('R', "AG"),
    ('Y', "CT"),
    ('S', "CG"),
    ('W', "AT"),
    ('K', "GT"),
    ('M', "AC"),
    ('B', "CGT"),
    ('D', "AGT"),
    ('H', "ACT"),
    ('V', "ACG"),
    ('N', "ACGT"),
];

fn expansion(symbol: char) -> Option<&'static str> {
    let symbol = match symbol.to_ascii_uppercase() {
        'U' => 'T',
        other => other,
    };
    IUPAC_CODES
        .iter()
        .find(|(code, _)| *code == symbol)
        .map(|(_, bases)| *bases)
}

/// Whether a sequence symbol satisfies a motif symbol: every base the
/// sequence symbol may stand for must be allowed by the motif symbol.
/// Gaps and unknown symbols never match.
pub fn char_match(motif_symbol: char, base: char) -> bool {
    match (expansion(motif_symbol), expansion(base)) {
        (Some(allowed), Some(possible)) => possible.chars().all(|b| allowed.contains(b)),
        _ => false,
    }
}

/// A motif hit in the sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifMatch {
    pub seq_id: String,
    /// 0-based start on the forward strand.
    pub position: usize,
    /// Forward-strand text of the matched window.
    pub matched: String,
    pub strand: Strand,
    pub mismatches: usize,
}

/// Degenerate motif search over IUPAC codes.
#[derive(Debug, Clone)]
pub struct MotifFinder {
    motif: Vec<char>,
    reverse: Vec<char>,
    exact: Regex,
    exact_reverse: Regex,
}

impl MotifFinder {
    pub fn new(motif: &str) -> Result<Self> {
        let motif = motif.trim().to_ascii_uppercase();
        if motif.is_empty() {
            return Err(BioSeqError::InvalidMotif("motif cannot be empty".to_string()));
        }
        if let Some(bad) = motif.chars().find(|c| expansion(*c).is_none()) {
            return Err(BioSeqError::InvalidMotif(format!(
                "{bad:?} is not an IUPAC nucleotide code"
            )));
        }

        let reverse = reverse_complement(&motif);
        Ok(Self {
            exact: compile_exact(&motif)?,
            exact_reverse: compile_exact(&reverse)?,
            motif: motif.chars().collect(),
            reverse: reverse.chars().collect(),
        })
    }

    pub fn motif(&self) -> String {
        self.motif.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.motif.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motif.is_empty()
    }

    /// Forward-strand hits with at most `max_mismatches` differing positions.
    /// Overlapping hits are all reported.
    pub fn search<S: Nucleotides + ?Sized>(&self, seq: &S, max_mismatches: usize) -> Vec<MotifMatch> {
        let upper = seq.bases().to_ascii_uppercase();
        if max_mismatches == 0 {
            find_exact(&self.exact, &upper, seq.seq_id(), Strand::Forward)
        } else {
            find_approximate(&self.motif, &upper, max_mismatches, seq.seq_id(), Strand::Forward)
        }
    }

    /// Forward hits plus hits of the reverse-complemented motif, the latter
    /// reported on the `-` strand at their forward position. A motif equal to
    /// its own reverse complement is only searched once.
    pub fn search_both_strands<S: Nucleotides + ?Sized>(
        &self,
        seq: &S,
        max_mismatches: usize,
    ) -> Vec<MotifMatch> {
        let mut matches = self.search(seq, max_mismatches);

        if self.reverse != self.motif {
            let upper = seq.bases().to_ascii_uppercase();
            let reverse = if max_mismatches == 0 {
                find_exact(&self.exact_reverse, &upper, seq.seq_id(), Strand::Reverse)
            } else {
                find_approximate(
                    &self.reverse,
                    &upper,
                    max_mismatches,
                    seq.seq_id(),
                    Strand::Reverse,
                )
            };
            matches.extend(reverse);
        }

        matches.sort_by_key(|m| m.position);
        matches
    }
}

/// Regex character class accepting every symbol that satisfies `motif_symbol`.
fn symbol_class(motif_symbol: char) -> String {
    let mut class = String::from("[");
    for (code, _) in IUPAC_CODES.iter() {
        if char_match(motif_symbol, *code) {
            class.push(*code);
        }
    }
    if char_match(motif_symbol, 'U') {
        class.push('U');
    }
    class.push(']');
    class
}

fn compile_exact(motif: &str) -> Result<Regex> {
    let pattern: String = motif.chars().map(symbol_class).collect();
    Regex::new(&pattern).map_err(|e| BioSeqError::InvalidMotif(e.to_string()))
}

fn find_exact(re: &Regex, haystack: &str, seq_id: &str, strand: Strand) -> Vec<MotifMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;
    // restart one past each hit so overlapping hits are kept
    while pos < haystack.len() {
        let Some(m) = re.find_at(haystack, pos) else {
            break;
        };
        matches.push(MotifMatch {
            seq_id: seq_id.to_string(),
            position: haystack[..m.start()].chars().count(),
            matched: m.as_str().to_string(),
            strand,
            mismatches: 0,
        });
        pos = m.start() + 1;
    }
    matches
}

fn find_approximate(
    motif: &[char],
    haystack: &str,
    max_mismatches: usize,
    seq_id: &str,
    strand: Strand,
) -> Vec<MotifMatch> {
    let bases: Vec<char> = haystack.chars().collect();
    if motif.is_empty() || bases.len() < motif.len() {
        return Vec::new();
    }

    bases
        .windows(motif.len())
        .enumerate()
        .filter_map(|(position, window)| {
            let mismatches = motif
                .iter()
                .zip(window)
                .filter(|(m, b)| !char_match(**m, **b))
                .count();
            (mismatches <= max_mismatches).then(|| MotifMatch {
                seq_id: seq_id.to_string(),
                position,
                matched: window.iter().collect(),
                strand,
                mismatches,
            })
        })
        .collect()
}

/// Find regex pattern matches on the forward strand (case-insensitive)
pub fn find_regex<S: Nucleotides + ?Sized>(seq: &S, pattern: &str) -> Result<Vec<MotifMatch>> {
    let re = Regex::new(&format!("(?i){}", pattern))
        .map_err(|e| BioSeqError::InvalidMotif(e.to_string()))?;
    let bases = seq.bases();

    Ok(re
        .find_iter(bases)
        .map(|m| MotifMatch {
            seq_id: seq.seq_id().to_string(),
            position: bases[..m.start()].chars().count(),
            matched: m.as_str().to_ascii_uppercase(),
            strand: Strand::Forward,
            mismatches: 0,
        })
        .collect())
}
