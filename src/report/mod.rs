use crate::discid::DiscFingerprinter;
use crate::musicbrainz::ReleaseSource;
use crate::toc::TocParser;
use log::warn;

/// Prints the post-scan summary: track count, Disc ID and either the known
/// releases or a submission URL.
///
/// A failed lookup is reported as a warning and falls back to the submission
/// URL; it never aborts the report.
pub async fn print_disc_report<S: ReleaseSource>(
    parser: &mut TocParser,
    source: &mut S,
    fingerprinter: &impl DiscFingerprinter,
) {
    println!();

    if !parser.is_parsed() {
        println!("Couldn't locate TOC.");
        return;
    }

    let tracks = parser.track_count();
    println!("{tracks} track{}", if tracks > 1 { "s" } else { "" });

    if let Some(disc_id) = parser.disc_id(fingerprinter) {
        println!("Disc ID: {disc_id}");
    }

    let releases = match parser.releases(source, fingerprinter).await {
        Ok(found) => found.to_vec(),
        Err(err) => {
            warn!("MusicBrainz lookup unavailable: {err}");
            Vec::new()
        }
    };

    if !releases.is_empty() {
        println!("This Disc ID has already been submitted to MusicBrainz.");
        println!("List of releases:");
        for release in &releases {
            println!("* {} - {}", release.artist(), release.title);
            println!("  {}", release.id);
        }
    } else if let Some(url) = parser.submission_url() {
        println!("Submission URL: {url}");
    }
}
