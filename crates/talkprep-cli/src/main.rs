use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::args::TalkArgs;

#[derive(Parser)]
#[command(name = "talkprep")]
#[command(about = "TalkPrep - structured conference-talk preparation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a timed talk outline
    Outline(TalkArgs),
    /// Generate a script skeleton with speaker notes
    Script(TalkArgs),
    /// Generate a slide deck and export it
    Slides(commands::slides::SlidesArgs),
    /// Generate a Q&A preparation guide
    Qa(TalkArgs),
    /// Generate timing cues and practice suggestions for rehearsal
    Cues(TalkArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Outline(args) => commands::outline::run(&args)?,
        Commands::Script(args) => commands::script::run(&args)?,
        Commands::Slides(args) => commands::slides::run(&args)?,
        Commands::Qa(args) => commands::qa::run(&args)?,
        Commands::Cues(args) => commands::cues::run(&args)?,
    }

    Ok(())
}
