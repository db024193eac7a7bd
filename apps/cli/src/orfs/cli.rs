use clap::{value_parser, Arg, ArgAction, Command};

use crate::input::output_args;

pub const ORFS_CMD: &str = "orfs";

pub fn create_orfs_cli() -> Command {
    Command::new(ORFS_CMD)
        .about("Find open reading frames on both strands. Outputs seq_id, start, end, frame, strand, length, protein (TSV unless --format or --output say otherwise).")
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .value_name("NT")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .help("Minimum ORF length in nucleotides (overrides --config)"),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .value_name("ID")
                .value_parser(value_parser!(u8))
                .help("NCBI genetic code table: 1 (standard) or 11 (bacterial)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("JSON")
                .help("Detector settings file, e.g. {\"min_length\": 90, \"table\": 11}"),
        )
        .arg(
            Arg::new("overlaps")
                .long("overlaps")
                .action(ArgAction::SetTrue)
                .help("Report pairs of overlapping ORFs on the same strand instead of the ORFs"),
        )
        .args(output_args())
}
