use clap::{Arg, Command};

use crate::input::output_args;

pub const TRANSLATE_CMD: &str = "translate";

pub fn create_translate_cli() -> Command {
    Command::new(TRANSLATE_CMD)
        .about("Translate each sequence in all six reading frames, or in one frame.")
        .arg(
            Arg::new("frame")
                .long("frame")
                .value_name("LABEL")
                .allow_hyphen_values(true)
                .help("Single frame to translate: +1, +2, +3, -1, -2 or -3"),
        )
        .args(output_args())
}
