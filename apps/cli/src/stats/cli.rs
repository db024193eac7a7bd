use clap::{Arg, ArgAction, Command};

use crate::input::output_args;

pub const STATS_CMD: &str = "stats";

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about("Per-sequence length, GC content, base composition and reverse complement. Prints the full summary when no report is selected.")
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .action(ArgAction::SetTrue)
                .help("Sequence length per sequence"),
        )
        .arg(
            Arg::new("gc")
                .long("gc")
                .action(ArgAction::SetTrue)
                .help("GC content per sequence"),
        )
        .arg(
            Arg::new("revcomp")
                .long("revcomp")
                .action(ArgAction::SetTrue)
                .help("Reverse complement per sequence"),
        )
        .arg(
            Arg::new("basecount")
                .short('b')
                .long("basecount")
                .action(ArgAction::SetTrue)
                .help("Base counts per sequence"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .action(ArgAction::SetTrue)
                .help("Lengths, GC content and base composition"),
        )
        .args(output_args())
}
