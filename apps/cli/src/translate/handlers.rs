use std::io::Write;

use anyhow::{Context, Result};
use bioseq_core::translate::FrameTranslation;
use bioseq_core::{ReadingFrame, Translator};
use bioseq_formats::export::write_translations;
use bioseq_formats::ExportFormat;
use clap::ArgMatches;

use crate::input::{export_format, load_sequences, open_output};

pub fn run_translate(matches: &ArgMatches) -> Result<()> {
    let frame = matches
        .get_one::<String>("frame")
        .map(|label| {
            label
                .parse::<ReadingFrame>()
                .with_context(|| format!("Invalid --frame {label}"))
        })
        .transpose()?;

    let sequences = load_sequences(matches)?;
    let format = export_format(matches)?.unwrap_or(ExportFormat::Fasta);

    let translator = Translator::default();
    let translations: Vec<(String, Vec<FrameTranslation>)> = sequences
        .iter()
        .map(|seq| {
            let frames = match frame {
                Some(frame) => vec![FrameTranslation {
                    frame,
                    protein: translator.translate_frame(seq, frame),
                }],
                None => translator.translate_six_frames(seq).into_iter().collect(),
            };
            (seq.id().to_string(), frames)
        })
        .collect();

    let mut out = open_output(matches)?;
    write_translations(&mut out, &translations, format)?;
    out.flush()?;
    Ok(())
}
