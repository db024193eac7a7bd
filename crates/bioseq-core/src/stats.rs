use serde::{Deserialize, Serialize};

use crate::sequence::{Nucleotides, ALPHABET};

/// Per-symbol counts in [`ALPHABET`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCounts(Vec<(char, usize)>);

impl BaseCounts {
    pub fn get(&self, base: char) -> usize {
        let base = base.to_ascii_uppercase();
        self.0
            .iter()
            .find(|(b, _)| *b == base)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().copied()
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }
}

/// Count every alphabet symbol; symbols outside the alphabet are ignored.
pub fn base_counts(seq: &str) -> BaseCounts {
    let mut counts: Vec<(char, usize)> = ALPHABET.iter().map(|b| (*b, 0)).collect();
    for c in seq.chars() {
        let c = c.to_ascii_uppercase();
        if let Some(slot) = counts.iter_mut().find(|(b, _)| *b == c) {
            slot.1 += 1;
        }
    }
    BaseCounts(counts)
}

/// GC content as a percentage (0.0 to 100.0) of recognised symbols.
/// Returns 0.0 when the sequence holds no recognised symbols.
pub fn gc_content(seq: &str) -> f64 {
    let counts = base_counts(seq);
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    let gc = counts.get('G') + counts.get('C');
    gc as f64 / total as f64 * 100.0
}

/// GC percent of each `window_size` window, advancing by `step`, keyed by
/// window start.
pub fn gc_content_windowed(seq: &str, window_size: usize, step: usize) -> Vec<(usize, f64)> {
    if window_size == 0 || step == 0 {
        return Vec::new();
    }
    let bases: Vec<char> = seq.chars().collect();
    bases
        .windows(window_size)
        .step_by(step)
        .enumerate()
        .map(|(i, window)| (i * step, gc_content(&window.iter().collect::<String>())))
        .collect()
}

/// Descriptive statistics for one sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStats {
    pub seq_id: String,
    pub length: usize,
    pub gc_percent: f64,
    pub base_counts: BaseCounts,
}

impl SequenceStats {
    pub fn compute<S: Nucleotides + ?Sized>(seq: &S) -> Self {
        let bases = seq.bases();
        Self {
            seq_id: seq.seq_id().to_string(),
            length: bases.len(),
            gc_percent: gc_content(bases),
            base_counts: base_counts(bases),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::NucleotideSequence;

    const TINY: &str = "ATGCGTACGTAGCTAGTTAGCGATCGGGGCTAGCTAGCTAGCTAG";

    #[test]
    fn test_gc_content() {
        assert!((gc_content("ATCG") - 50.0).abs() < f64::EPSILON);
        assert!((gc_content("GGCC") - 100.0).abs() < f64::EPSILON);
        assert!((gc_content("G") - 100.0).abs() < f64::EPSILON);
        assert!((gc_content("ATATAT") - 0.0).abs() < f64::EPSILON);
        assert!((gc_content("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gc_content_counts_ambiguity_in_denominator() {
        // two of four recognised symbols are G/C
        assert!((gc_content("GCNN") - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gc_content_windowed() {
        let result = gc_content_windowed("ATCGATCG", 4, 2);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].0, 0);
        assert!((result[0].1 - 50.0).abs() < f64::EPSILON);
        assert!(gc_content_windowed("ATCG", 8, 1).is_empty());
    }

    #[test]
    fn test_base_counts() {
        let counts = base_counts(TINY);
        assert_eq!(counts.get('A'), 10);
        assert_eq!(counts.get('C'), 9);
        assert_eq!(counts.get('G'), 15);
        assert_eq!(counts.get('T'), 11);
        assert_eq!(counts.get('N'), 0);
        assert_eq!(counts.total(), TINY.len());
        assert_eq!(counts.iter().count(), ALPHABET.len());
    }

    #[test]
    fn test_sequence_stats() {
        let seq = NucleotideSequence::new("tiny", TINY);
        let stats = SequenceStats::compute(&seq);
        assert_eq!(stats.seq_id, "tiny");
        assert_eq!(stats.length, 45);
        assert_eq!(format!("{:.2}", stats.gc_percent), "53.33");
    }
}
