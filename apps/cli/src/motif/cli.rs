use clap::{value_parser, Arg, ArgAction, Command};

use crate::input::output_args;

pub const MOTIF_CMD: &str = "motif";

pub fn create_motif_cli() -> Command {
    Command::new(MOTIF_CMD)
        .about("Search for an IUPAC nucleotide motif. Outputs seq_id, position, matched, strand, mismatches.")
        .arg(
            Arg::new("motif")
                .short('m')
                .long("motif")
                .required(true)
                .value_name("IUPAC")
                .help("Motif over A C G T R Y S W K M B D H V N"),
        )
        .arg(
            Arg::new("mismatches")
                .long("mismatches")
                .value_name("N")
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Maximum number of mismatching positions"),
        )
        .arg(
            Arg::new("both-strands")
                .long("both-strands")
                .action(ArgAction::SetTrue)
                .help("Also search the reverse complement of the motif"),
        )
        .args(output_args())
}
