use crate::commands::Cli;
use crate::discid::MbDiscId;
use crate::musicbrainz::MusicBrainzApi;
use crate::toc::TocParser;
use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use tokio::io::BufReader;

mod commands;
mod discid;
mod musicbrainz;
mod report;
mod toc;
mod util;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut parser = TocParser::new();

    match &cli.file {
        Some(path) => toc::scan_file(&mut parser, path).await?,
        None if std::io::stdin().is_terminal() => {
            Cli::command().print_help()?;
            println!();
            toc::scan_interactive(&mut parser, BufReader::new(tokio::io::stdin())).await?;
        }
        None => toc::scan_lines(&mut parser, BufReader::new(tokio::io::stdin())).await?,
    }

    let mut api = MusicBrainzApi::new()?;

    report::print_disc_report(&mut parser, &mut api, &MbDiscId).await;

    Ok(())
}
