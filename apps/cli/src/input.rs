use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use bioseq_core::NucleotideSequence;
use bioseq_formats::fasta::{parse_file, parse_str};
use bioseq_formats::{ExportFormat, ParseOptions};
use clap::{Arg, ArgAction, ArgMatches};
use log::info;

pub const FILE_ARG: &str = "file";
pub const STRING_ARG: &str = "string";
pub const STRICT_ARG: &str = "strict";
pub const STRICT_SEQ_ARG: &str = "strict-seq";
pub const VERBOSE_ARG: &str = "verbose";
pub const QUIET_ARG: &str = "quiet";
pub const FORMAT_ARG: &str = "format";
pub const OUTPUT_ARG: &str = "output";

/// Input, strictness and verbosity flags shared by every subcommand.
pub fn global_args() -> Vec<Arg> {
    vec![
        Arg::new(FILE_ARG)
            .short('f')
            .long("file")
            .value_name("FASTA")
            .global(true)
            .conflicts_with(STRING_ARG)
            .help("Path to the FASTA file"),
        Arg::new(STRING_ARG)
            .short('s')
            .long("string")
            .value_name("TEXT")
            .global(true)
            .help("FASTA-formatted string"),
        Arg::new(STRICT_ARG)
            .long("strict")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Fail on structural FASTA errors"),
        Arg::new(STRICT_SEQ_ARG)
            .long("strict-seq")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Fail on invalid sequence characters"),
        Arg::new(VERBOSE_ARG)
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("More log output on stderr (repeatable)"),
        Arg::new(QUIET_ARG)
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Only log errors"),
    ]
}

/// `--format` and `--output` for subcommands that export.
pub fn output_args() -> [Arg; 2] {
    [
        Arg::new(FORMAT_ARG)
            .long("format")
            .value_name("FORMAT")
            .value_parser(["csv", "tsv", "json", "fasta"])
            .help("Export format (default: inferred from --output)"),
        Arg::new(OUTPUT_ARG)
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Output file (default: stdout)"),
    ]
}

pub fn parse_options(matches: &ArgMatches) -> ParseOptions {
    ParseOptions {
        strict_structure: matches.get_flag(STRICT_ARG),
        strict_sequence: matches.get_flag(STRICT_SEQ_ARG),
    }
}

/// Parse the `--file` or `--string` input and print the parser report to
/// stderr.
pub fn load_sequences(matches: &ArgMatches) -> Result<Vec<NucleotideSequence>> {
    let options = parse_options(matches);
    let report = match (
        matches.get_one::<String>(FILE_ARG),
        matches.get_one::<String>(STRING_ARG),
    ) {
        (Some(path), _) => parse_file(path, &options)
            .with_context(|| format!("Failed to parse FASTA file: {path}"))?,
        (None, Some(text)) => parse_str(text, &options).context("Failed to parse FASTA string")?,
        (None, None) => bail!("No input given: use --file or --string"),
    };

    eprintln!("{}", report.summary());
    eprintln!();

    if report.is_empty() {
        bail!("No valid sequences parsed");
    }
    info!("loaded {} sequence(s)", report.len());
    Ok(report.records)
}

/// Export format from `--format`, else from the `--output` extension.
/// `None` means plain text to the terminal.
pub fn export_format(matches: &ArgMatches) -> Result<Option<ExportFormat>> {
    if let Some(name) = matches.get_one::<String>(FORMAT_ARG) {
        return Ok(Some(name.parse()?));
    }
    match matches.get_one::<String>(OUTPUT_ARG) {
        Some(path) => ExportFormat::from_path(path)
            .map(Some)
            .with_context(|| format!("Cannot infer export format from {path}; pass --format")),
        None => Ok(None),
    }
}

pub fn open_output(matches: &ArgMatches) -> Result<Box<dyn Write>> {
    match matches.get_one::<String>(OUTPUT_ARG) {
        Some(path) => {
            let file = File::create(Path::new(path))
                .with_context(|| format!("Failed to create output file: {path}"))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
