use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use bioseq_core::{overlapping_orfs, DetectorConfig, Orf};
use bioseq_formats::export::{self, write_orfs};
use bioseq_formats::ExportFormat;
use clap::ArgMatches;
use log::info;

use crate::input::{export_format, load_sequences, open_output};

pub fn run_orfs(matches: &ArgMatches) -> Result<()> {
    let config = detector_config(matches)?;
    let detector = config.build().context("Invalid ORF detector settings")?;
    let sequences = load_sequences(matches)?;

    let per_record = detector.find_orfs_batch(&sequences);
    let format = export_format(matches)?.unwrap_or(ExportFormat::Tsv);
    let mut out = open_output(matches)?;

    if matches.get_flag("overlaps") {
        write_overlaps(&mut out, &per_record, format)?;
    } else {
        let orfs: Vec<Orf> = per_record.into_iter().flatten().collect();
        info!("{} ORF(s) found in {} sequence(s)", orfs.len(), sequences.len());
        write_orfs(&mut out, &orfs, format)?;
    }

    out.flush()?;
    Ok(())
}

/// Settings from `--config`, with `--min-length` and `--table` on top.
fn detector_config(matches: &ArgMatches) -> Result<DetectorConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            DetectorConfig::from_json(&text)
                .with_context(|| format!("Invalid config file: {path}"))?
        }
        None => DetectorConfig::default(),
    };

    if let Some(min_length) = matches.get_one::<i64>("min-length") {
        config.min_length = *min_length;
    }
    if let Some(table) = matches.get_one::<u8>("table") {
        config.table = *table;
    }
    Ok(config)
}

fn write_overlaps(out: &mut dyn Write, per_record: &[Vec<Orf>], format: ExportFormat) -> Result<()> {
    let pairs: Vec<(&Orf, &Orf)> = per_record
        .iter()
        .flat_map(|orfs| overlapping_orfs(orfs))
        .collect();
    info!("{} overlapping ORF pair(s)", pairs.len());
    export::write_overlaps(out, &pairs, format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioseq_core::{NucleotideSequence, OrfDetector};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overlaps_across_records() {
        let detector = OrfDetector::default();
        let per_record = vec![
            detector.find_orfs(&NucleotideSequence::new("a,b", "ATGATGTAA")),
            detector.find_orfs(&NucleotideSequence::new("c", "ATGAAATAG")),
        ];
        let mut buf = Vec::new();
        write_overlaps(&mut buf, &per_record, ExportFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "seq_id,strand,first_start,first_end,first_frame,second_start,second_end,second_frame\n\
             \"a,b\",+,0,5,0,3,5,0\n"
        );
    }

    #[test]
    fn test_overlaps_reject_fasta() {
        let mut buf = Vec::new();
        assert!(write_overlaps(&mut buf, &[], ExportFormat::Fasta).is_err());
    }
}
