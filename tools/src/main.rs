use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tools::{format_summary, summarize_stream};
use wire::{Limits, Profile};

#[derive(Parser)]
#[command(
    name = "nanowire-tools",
    version,
    about = "nanowire request stream inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect a captured request stream.
    Inspect {
        /// Path to the raw stream bytes.
        stream_path: PathBuf,
        /// Wire profile the stream was captured under.
        #[arg(long, value_enum, default_value_t = ProfileArg::Standard)]
        profile: ProfileArg,
        /// Limit the number of printed requests.
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Standard,
    Compact,
}

impl ProfileArg {
    const fn select(self) -> (Profile, Limits) {
        match self {
            Self::Standard => (Profile::STANDARD, Limits::standard()),
            Self::Compact => (Profile::COMPACT, Limits::compact()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            stream_path,
            profile,
            limit,
        } => {
            let bytes = fs::read(&stream_path)
                .with_context(|| format!("read stream {}", stream_path.display()))?;
            let (profile, limits) = profile.select();
            let summary = summarize_stream(&bytes, profile, &limits)
                .context("decode stream (is the profile right?)")?;
            print!("{}", format_summary(&summary, limit));
        }
    }
    Ok(())
}
