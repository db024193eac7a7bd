use std::io::Write;

use anyhow::Result;
use bioseq_core::sequence::ALPHABET;
use bioseq_core::stats::{base_counts, gc_content};
use bioseq_core::{NucleotideSequence, SequenceStats};
use bioseq_formats::export::write_stats;
use clap::ArgMatches;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

use crate::input::{export_format, load_sequences, open_output};

#[derive(Tabled)]
struct LengthRow<'a> {
    #[tabled(rename = "Sequence ID")]
    id: &'a str,
    #[tabled(rename = "Length")]
    length: usize,
}

#[derive(Tabled)]
struct GcRow<'a> {
    #[tabled(rename = "Sequence")]
    id: &'a str,
    #[tabled(rename = "GC%")]
    gc: String,
}

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let sequences = load_sequences(matches)?;
    let format = export_format(matches)?;
    let mut out = open_output(matches)?;

    if let Some(format) = format {
        let stats: Vec<SequenceStats> = sequences.iter().map(SequenceStats::compute).collect();
        write_stats(&mut out, &stats, format)?;
        out.flush()?;
        return Ok(());
    }

    let length = matches.get_flag("length");
    let gc = matches.get_flag("gc");
    let revcomp = matches.get_flag("revcomp");
    let basecount = matches.get_flag("basecount");
    let summary = matches.get_flag("summary");

    if !(length || gc || revcomp || basecount || summary) {
        print_summary(&mut out, &sequences)?;
        out.flush()?;
        return Ok(());
    }

    if length {
        print_lengths(&mut out, &sequences)?;
        writeln!(out)?;
    }
    if gc {
        print_gc_content(&mut out, &sequences)?;
        writeln!(out)?;
    }
    if revcomp {
        print_revcomp(&mut out, &sequences)?;
        writeln!(out)?;
    }
    if basecount {
        print_base_counts(&mut out, &sequences)?;
        writeln!(out)?;
    }
    if summary {
        print_summary(&mut out, &sequences)?;
    }

    out.flush()?;
    Ok(())
}

fn print_lengths(out: &mut dyn Write, sequences: &[NucleotideSequence]) -> Result<()> {
    let rows = sequences.iter().map(|s| LengthRow {
        id: s.id(),
        length: s.len(),
    });
    writeln!(out, "{}", Table::new(rows))?;
    Ok(())
}

fn print_gc_content(out: &mut dyn Write, sequences: &[NucleotideSequence]) -> Result<()> {
    let rows = sequences.iter().map(|s| GcRow {
        id: s.id(),
        gc: format!("{:.2}%", gc_content(s.as_str())),
    });
    writeln!(out, "{}", Table::new(rows))?;
    Ok(())
}

fn print_revcomp(out: &mut dyn Write, sequences: &[NucleotideSequence]) -> Result<()> {
    for s in sequences {
        writeln!(out, ">{} reverse complement", s.id())?;
        writeln!(out, "{}", s.reverse_complement().as_str())?;
        writeln!(out, "{}", "-".repeat(30))?;
    }
    Ok(())
}

fn print_base_counts(out: &mut dyn Write, sequences: &[NucleotideSequence]) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record(
        std::iter::once("Sequence".to_string()).chain(ALPHABET.iter().map(|b| b.to_string())),
    );
    for s in sequences {
        let counts = base_counts(s.as_str());
        builder.push_record(
            std::iter::once(s.id().to_string()).chain(counts.iter().map(|(_, n)| n.to_string())),
        );
    }
    writeln!(out, "{}", builder.build())?;
    Ok(())
}

fn print_summary(out: &mut dyn Write, sequences: &[NucleotideSequence]) -> Result<()> {
    writeln!(out, "SEQUENCE LENGTHS")?;
    print_lengths(out, sequences)?;
    writeln!(out)?;

    writeln!(out, "GC CONTENT")?;
    print_gc_content(out, sequences)?;
    writeln!(out)?;

    writeln!(out, "BASE COMPOSITION")?;
    print_base_counts(out, sequences)
}
