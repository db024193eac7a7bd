//! # bioseq - nucleotide sequence analysis from the command line
//!
//! ```bash
//! # Lengths, GC content and base composition tables
//! bioseq -f genome.fasta stats
//!
//! # Six-frame translation of a literal record
//! bioseq -s $'>s1\nATGAAATAG' translate
//!
//! # ORFs of at least 90 bp with the bacterial code, as CSV
//! bioseq -f genome.fasta orfs --min-length 90 --table 11 --output orfs.csv
//!
//! # Degenerate motif hits on both strands, one mismatch allowed
//! bioseq -f genome.fasta motif --motif GRATTC --mismatches 1 --both-strands
//! ```

mod input;
mod logging;
mod motif;
mod orfs;
mod stats;
mod translate;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "bioseq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Nucleotide sequence analysis: statistics, six-frame translation, ORF detection and motif search.")
        .subcommand_required(true)
        .args(input::global_args())
        .subcommand(stats::cli::create_stats_cli())
        .subcommand(translate::cli::create_translate_cli())
        .subcommand(orfs::cli::create_orfs_cli())
        .subcommand(motif::cli::create_motif_cli())
}

fn main() -> Result<()> {
    let matches = build_parser().get_matches();

    logging::init_logging(
        matches.get_count(input::VERBOSE_ARG),
        matches.get_flag(input::QUIET_ARG),
    );

    match matches.subcommand() {
        Some((stats::cli::STATS_CMD, matches)) => stats::handlers::run_stats(matches)?,
        Some((translate::cli::TRANSLATE_CMD, matches)) => {
            translate::handlers::run_translate(matches)?
        }
        Some((orfs::cli::ORFS_CMD, matches)) => orfs::handlers::run_orfs(matches)?,
        Some((motif::cli::MOTIF_CMD, matches)) => motif::handlers::run_motif(matches)?,
        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
