use std::io::Write;

use anyhow::{Context, Result};
use bioseq_core::{MotifFinder, MotifMatch};
use bioseq_formats::export::write_matches;
use bioseq_formats::ExportFormat;
use clap::ArgMatches;
use log::info;

use crate::input::{export_format, load_sequences, open_output};

pub fn run_motif(matches: &ArgMatches) -> Result<()> {
    let motif = matches
        .get_one::<String>("motif")
        .context("--motif is required")?;
    let finder = MotifFinder::new(motif).with_context(|| format!("Invalid motif {motif}"))?;
    let max_mismatches = matches.get_one::<usize>("mismatches").copied().unwrap_or(0);
    let both_strands = matches.get_flag("both-strands");

    let sequences = load_sequences(matches)?;
    let hits: Vec<MotifMatch> = sequences
        .iter()
        .flat_map(|seq| {
            if both_strands {
                finder.search_both_strands(seq, max_mismatches)
            } else {
                finder.search(seq, max_mismatches)
            }
        })
        .collect();
    info!("{} hit(s) for motif {}", hits.len(), finder.motif());

    let format = export_format(matches)?.unwrap_or(ExportFormat::Tsv);
    let mut out = open_output(matches)?;
    write_matches(&mut out, &hits, format)?;
    out.flush()?;
    Ok(())
}
