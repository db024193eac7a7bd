use bioseq_core::operations::reverse_complement;
use bioseq_core::orf::{overlapping_orfs, reflect};
use bioseq_core::{NucleotideSequence, OrfDetector, Strand, Translator};

/// Every DNA string over ACGT with length in `min..=max`.
fn all_sequences(min: usize, max: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut layer = vec![String::new()];
    for len in 1..=max {
        layer = layer
            .iter()
            .flat_map(|prefix| ['A', 'C', 'G', 'T'].map(|b| format!("{prefix}{b}")))
            .collect();
        if len >= min {
            out.extend(layer.iter().cloned());
        }
    }
    out
}

/// Independent count of M..* spans in one translated frame.
fn count_spans(protein: &str) -> usize {
    let aas: Vec<char> = protein.chars().collect();
    let mut count = 0;
    for i in 0..aas.len() {
        if aas[i] == 'M' && aas[i + 1..].contains(&'*') {
            count += 1;
        }
    }
    count
}

/// Sequences rich in starts and stops, long enough to exercise nesting and
/// both strands.
fn sample_sequences() -> Vec<String> {
    let mut seqs = all_sequences(3, 7);
    let motifs = ["ATG", "TAA", "TAG", "TGA", "CAT", "TTA", "CTA", "TCA", "GCC"];
    for a in motifs {
        for b in motifs {
            for c in motifs {
                seqs.push(format!("{a}{b}A{c}{a}GG{b}"));
            }
        }
    }
    seqs
}

#[test]
fn orf_count_matches_oracle() {
    let detector = OrfDetector::default();
    let translator = Translator::default();

    for seq in sample_sequences() {
        let expected: usize = translator
            .translate_six_frames(seq.as_str())
            .iter()
            .map(|t| count_spans(&t.protein))
            .sum();
        assert_eq!(detector.find_orfs(seq.as_str()).len(), expected, "sequence {seq}");
    }
}

#[test]
fn orf_records_hold_invariants() {
    let detector = OrfDetector::default();

    for seq in sample_sequences() {
        for orf in detector.find_orfs(seq.as_str()) {
            assert_eq!(orf.length() % 3, 0);
            assert_eq!(orf.length(), orf.end() - orf.start() + 1);
            assert!(orf.protein().starts_with('M'));
            assert!(!orf.protein().contains('*'));
            assert_eq!(orf.protein().len() * 3, orf.length());
            assert!(orf.end() < seq.len());
            assert!(orf.frame() <= 2);
        }
    }
}

#[test]
fn orf_coordinates_translate_back_to_protein() {
    let detector = OrfDetector::default();
    let translator = Translator::default();

    for seq in sample_sequences() {
        for orf in detector.find_orfs(seq.as_str()) {
            let span = &seq[orf.start()..=orf.end()];
            let coding = match orf.strand() {
                Strand::Forward => span.to_string(),
                Strand::Reverse => reverse_complement(span),
            };
            assert_eq!(translator.translate(coding.as_str(), 0).unwrap(), orf.protein());
        }
    }
}

#[test]
fn min_length_filter_holds() {
    let seq = "ATGATGAAACCCTAGTTTCATCATTTA";
    let all = OrfDetector::default().find_orfs(seq);
    for min_length in [0, 3, 6, 9, 12, 15, 30] {
        let kept = OrfDetector::new(min_length).find_orfs(seq);
        assert!(kept.iter().all(|o| o.length() >= min_length));
        let expected = all.iter().filter(|o| o.length() >= min_length).count();
        assert_eq!(kept.len(), expected);
    }
}

#[test]
fn overlap_pairs_hold_properties() {
    let detector = OrfDetector::default();
    let seq = NucleotideSequence::new("ovl", "ATGATGAAATGACATCATTTATGCCCTAAATG");
    let orfs = detector.find_orfs(&seq);
    assert!(!orfs.is_empty());

    let pairs = overlapping_orfs(&orfs);
    assert!(!pairs.is_empty());
    for (a, b) in &pairs {
        assert_eq!(a.strand(), b.strand());
        assert!(a.start() <= b.end());
        assert!(b.start() <= a.end());
        assert!(orfs.contains(a));
        assert!(orfs.contains(b));
    }

    // brute-force count over unordered pairs
    let mut expected = 0;
    for i in 0..orfs.len() {
        for j in i + 1..orfs.len() {
            if orfs[i].overlaps(&orfs[j]) {
                expected += 1;
            }
        }
    }
    assert_eq!(pairs.len(), expected);
}

#[test]
fn reflection_is_idempotent() {
    for len in 1..200 {
        for x in 0..len {
            let mirrored = reflect(x, len).unwrap();
            assert!(mirrored < len);
            assert_eq!(reflect(mirrored, len), Some(x));
        }
    }
}

#[test]
fn concrete_scenarios() {
    let orfs = OrfDetector::default().find_orfs("ATGAAATAG");
    assert_eq!(orfs.len(), 1);
    assert_eq!(
        (orfs[0].start(), orfs[0].end(), orfs[0].frame(), orfs[0].strand()),
        (0, 5, 0, Strand::Forward)
    );
    assert_eq!(orfs[0].protein(), "MK");

    assert!(OrfDetector::default().find_orfs("ATG").is_empty());
}
