use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::str::FromStr;
use talkprep_core::slides::{ExportFormat, ExportOptions};

use super::args::TalkArgs;

#[derive(Args, Debug)]
pub struct SlidesArgs {
    #[command(flatten)]
    pub talk: TalkArgs,

    /// Export format: markdown, json or html
    #[arg(long, short = 'f', default_value = "markdown")]
    pub format: String,

    /// Leave speaker notes out of the export
    #[arg(long)]
    pub no_notes: bool,

    /// Leave per-slide durations out of the export
    #[arg(long)]
    pub no_durations: bool,

    /// Write to the derived filename instead of stdout
    #[arg(long, short = 'o')]
    pub output: bool,
}

pub fn run(args: &SlidesArgs) -> Result<()> {
    let format = ExportFormat::from_str(&args.format)
        .map_err(|_| anyhow::anyhow!("unknown format '{}' (expected one of: markdown, json, html)", args.format))?;

    let mut workflow = super::args::outlined_workflow(&args.talk)?;
    let validation = workflow.generate_slides()?;
    for warning in &validation.warnings {
        eprintln!("warning: {warning}");
    }
    for suggestion in &validation.suggestions {
        eprintln!("suggestion: {suggestion}");
    }

    let options = ExportOptions {
        format,
        include_speaker_notes: !args.no_notes,
        include_durations: !args.no_durations,
    };
    let export = workflow.export_slides(&options)?;

    if args.output {
        let slide_count = workflow.slide_deck()?.slides.len();
        fs::write(&export.filename, &export.content)
            .with_context(|| format!("Failed to write {}", export.filename))?;
        println!("Wrote {} ({} slides)", export.filename, slide_count);
    } else {
        println!("{}", export.content);
    }
    Ok(())
}
