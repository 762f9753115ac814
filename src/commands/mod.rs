use clap::Parser;
use std::path::PathBuf;

/// CLI for extracting a MusicBrainz TOC and Disc ID from EAC rip logs.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Extracts the table of contents from an EAC rip log, derives the MusicBrainz Disc ID and prints either the releases already attached to it or a TOC submission URL.\n\nIf run without arguments, the log is read from standard input. Press Ctrl-C to view results."
)]
pub struct Cli {
    /// Path to an EAC rip log, reads from standard input when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
