/// Complement a single IUPAC nucleotide symbol.
///
/// Self-complementary codes (S, W, N) and gap symbols map to themselves;
/// RNA `U` complements to `A`.
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'U' => 'A',
        'G' => 'C',
        'C' => 'G',
        'R' => 'Y',
        'Y' => 'R',
        'S' => 'S',
        'W' => 'W',
        'K' => 'M',
        'M' => 'K',
        'B' => 'V',
        'V' => 'B',
        'D' => 'H',
        'H' => 'D',
        'N' => 'N',
        other => other,
    }
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('A', 'T')]
    #[case('T', 'A')]
    #[case('G', 'C')]
    #[case('C', 'G')]
    #[case('U', 'A')]
    #[case('R', 'Y')]
    #[case('Y', 'R')]
    #[case('S', 'S')]
    #[case('W', 'W')]
    #[case('K', 'M')]
    #[case('M', 'K')]
    #[case('B', 'V')]
    #[case('V', 'B')]
    #[case('D', 'H')]
    #[case('H', 'D')]
    #[case('N', 'N')]
    #[case('-', '-')]
    #[case('.', '.')]
    fn test_complement_base(#[case] base: char, #[case] expected: char) {
        assert_eq!(complement_base(base), expected);
        assert_eq!(complement_base(base.to_ascii_lowercase()), expected);
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ATGC"), "GCAT");
        assert_eq!(reverse_complement("ATCGATCG"), "CGATCGAT");
        assert_eq!(reverse_complement("AAAAAA"), "TTTTTT");
        assert_eq!(reverse_complement("ctga"), "TCAG");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_reverse_complement_ambiguity_codes() {
        // reverse("RYSWKM") = "MKWSYR", then complement each symbol
        assert_eq!(reverse_complement("RYSWKM"), "KMWSRY");
        assert_eq!(
            reverse_complement("GGGTTTAAACCCGGGTRCCCGGGAAATTTKHM"),
            "KDMAAATTTCCCGGGYACCCGGGTTTAAACCC"
        );
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        for seq in ["ACGTNRYSWKMBDHV", "GATTACA", "N-N.N"] {
            assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
        }
    }
}
