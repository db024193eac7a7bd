use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::codon::{GeneticCode, STOP_SYMBOL};
use crate::error::{BioSeqError, Result};
use crate::sequence::Nucleotides;
use crate::translate::{Strand, Translator};

const START_SYMBOL: char = 'M';

/// Open reading frame result.
///
/// Coordinates are 0-based and inclusive on the forward strand of the
/// sequence as given, for both strands. The stop codon is not part of the
/// span or of `protein`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orf {
    seq_id: String,
    start: usize,
    end: usize,
    frame: u8,
    strand: Strand,
    length: usize,
    protein: String,
}

impl Orf {
    pub fn new(
        seq_id: impl Into<String>,
        start: usize,
        end: usize,
        frame: usize,
        strand: Strand,
        protein: impl Into<String>,
    ) -> Result<Self> {
        let protein = protein.into();
        if end < start {
            return Err(BioSeqError::InvalidCoordinate {
                start,
                end,
                reason: "end precedes start".to_string(),
            });
        }
        if frame > 2 {
            return Err(BioSeqError::InvalidFrame(frame));
        }
        if !protein.starts_with(START_SYMBOL) {
            return Err(BioSeqError::InvalidCoordinate {
                start,
                end,
                reason: format!("protein {protein:?} does not begin with {START_SYMBOL}"),
            });
        }
        if protein.contains(STOP_SYMBOL) {
            return Err(BioSeqError::InvalidCoordinate {
                start,
                end,
                reason: format!("protein {protein:?} contains a stop"),
            });
        }
        let length = end - start + 1;
        if length != protein.chars().count() * 3 {
            return Err(BioSeqError::InvalidCoordinate {
                start,
                end,
                reason: format!("span of {length} bp does not encode {protein:?}"),
            });
        }

        Ok(Self::from_scan(seq_id.into(), start, end, frame as u8, strand, protein))
    }

    /// Build from scanner output, which satisfies the invariants by construction.
    fn from_scan(
        seq_id: String,
        start: usize,
        end: usize,
        frame: u8,
        strand: Strand,
        protein: String,
    ) -> Self {
        debug_assert!(end >= start && frame <= 2);
        Self {
            seq_id,
            start,
            end,
            frame,
            strand,
            length: end - start + 1,
            protein,
        }
    }

    pub fn seq_id(&self) -> &str {
        &self.seq_id
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn frame(&self) -> usize {
        self.frame as usize
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn protein(&self) -> &str {
        &self.protein
    }

    /// Same strand and intersecting closed intervals.
    pub fn overlaps(&self, other: &Orf) -> bool {
        self.strand == other.strand && self.start <= other.end && other.start <= self.end
    }
}

/// Mirror a 0-based coordinate onto the opposite strand of a sequence of
/// length `len`. Applying it twice returns the original coordinate.
/// `None` when `coord` is not inside the sequence.
pub fn reflect(coord: usize, len: usize) -> Option<usize> {
    len.checked_sub(coord)?.checked_sub(1)
}

/// Reflect an inclusive interval; the endpoints swap roles.
pub fn reflect_interval(start: usize, end: usize, len: usize) -> Option<(usize, usize)> {
    Some((reflect(end, len)?, reflect(start, len)?))
}

/// Map an amino-acid span back to inclusive nucleotide coordinates in the
/// translated strand.
fn aa_span_to_dna(offset: usize, start_aa: usize, end_aa: usize) -> (usize, usize) {
    (offset + start_aa * 3, offset + end_aa * 3 + 2)
}

/// Start/stop scan of one translated frame.
///
/// Every `M` opens its own candidate and the search for the next start
/// resumes right after it, so nested starts that share a stop each yield a
/// span. Candidates still open when the protein ends are discarded. Returns
/// `(start_aa, stop_aa)` pairs in start order.
fn scan_frame(protein: &[char]) -> Vec<(usize, usize)> {
    let mut open = Vec::new();
    let mut spans = Vec::new();

    for (i, aa) in protein.iter().enumerate() {
        match *aa {
            START_SYMBOL => open.push(i),
            STOP_SYMBOL => spans.extend(open.drain(..).map(|start| (start, i))),
            _ => {}
        }
    }

    spans
}

/// Six-frame ORF detector.
#[derive(Debug, Clone, Default)]
pub struct OrfDetector {
    translator: Translator,
    min_length: usize,
}

impl OrfDetector {
    /// Detector over the standard code keeping ORFs of at least
    /// `min_length` nucleotides.
    pub fn new(min_length: usize) -> Self {
        Self::with_translator(Translator::default(), min_length)
    }

    pub fn with_translator(translator: Translator, min_length: usize) -> Self {
        Self {
            translator,
            min_length,
        }
    }

    /// Build from an untrusted signed length, e.g. a command-line value.
    pub fn try_new(min_length: i64, code: GeneticCode) -> Result<Self> {
        let min_length = usize::try_from(min_length).map_err(|_| {
            BioSeqError::InvalidConfig(format!(
                "min_length must be non-negative, got {min_length}"
            ))
        })?;
        Ok(Self::with_translator(Translator::new(code), min_length))
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Find ORFs in all six frames, ordered by frame (`+1 +2 +3 -1 -2 -3`)
    /// and then by start within a frame.
    ///
    /// A start with no stop codon downstream in its frame yields no ORF.
    pub fn find_orfs<S: Nucleotides + ?Sized>(&self, seq: &S) -> Vec<Orf> {
        let seq_len = seq.bases().chars().count();
        let mut orfs = Vec::new();

        for translation in self.translator.translate_six_frames(seq) {
            let frame = translation.frame;
            let protein: Vec<char> = translation.protein.chars().collect();

            for (start_aa, stop_aa) in scan_frame(&protein) {
                let span_len = stop_aa - start_aa;
                if span_len * 3 < self.min_length {
                    continue;
                }

                // reverse-frame spans are computed on the reverse complement
                let (start, end) = aa_span_to_dna(frame.offset(), start_aa, stop_aa - 1);
                let (start, end) = match frame.strand() {
                    Strand::Forward => (start, end),
                    Strand::Reverse => match reflect_interval(start, end, seq_len) {
                        Some(span) => span,
                        None => continue,
                    },
                };

                orfs.push(Orf::from_scan(
                    seq.seq_id().to_string(),
                    start,
                    end,
                    frame.offset() as u8,
                    frame.strand(),
                    protein[start_aa..stop_aa].iter().collect(),
                ));
            }
        }

        debug!(
            "found {} ORFs in '{}' (min_length={})",
            orfs.len(),
            seq.seq_id(),
            self.min_length
        );
        orfs
    }

    /// Run [`find_orfs`](Self::find_orfs) over many sequences on the rayon
    /// pool. Results keep the input order.
    pub fn find_orfs_batch<S: Nucleotides + Sync>(&self, seqs: &[S]) -> Vec<Vec<Orf>> {
        seqs.par_iter().map(|seq| self.find_orfs(seq)).collect()
    }

    pub fn overlapping_orfs<'a>(&self, orfs: &'a [Orf]) -> Vec<(&'a Orf, &'a Orf)> {
        overlapping_orfs(orfs)
    }
}

/// Every pair `(orfs[i], orfs[j])` with `i < j` on the same strand whose
/// intervals intersect, in input order.
pub fn overlapping_orfs(orfs: &[Orf]) -> Vec<(&Orf, &Orf)> {
    let mut pairs = Vec::new();
    for (i, a) in orfs.iter().enumerate() {
        for b in &orfs[i + 1..] {
            if a.overlaps(b) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}
