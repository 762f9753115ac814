use crate::discid::DiscFingerprinter;
use crate::musicbrainz::error::MusicBrainzResult;
use crate::musicbrainz::model::Release;
use crate::musicbrainz::{ReleaseSource, SUBMISSION_BASE_URL};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Lead-in gap between the start of the disc and the first audio sector.
pub const LEAD_IN_SECTORS: u32 = 150;

/// Accumulates disc geometry from the TOC block of an EAC rip log.
///
/// Lines are fed one at a time through [`TocParser::consume_line`]. Anything
/// before the TOC block is skipped; the first non-matching line after it ends
/// the block, signalled by a `false` return. Derived values (Disc ID, release
/// list) are computed at most once per instance.
#[derive(Debug, Default)]
pub struct TocParser {
    sectors: u32,
    offsets: Vec<u32>,
    disc_id: Option<String>,
    releases: Option<Vec<Release>>,
}

impl TocParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `line` as a TOC row or noise and folds it into the
    /// accumulated geometry.
    ///
    /// Returns `false` once a non-matching line follows the TOC block; the
    /// caller must stop feeding lines at that point.
    pub fn consume_line(&mut self, line: &str) -> bool {
        lazy_static! {
            static ref TOC_ROW: Regex = Regex::new(
                r"\s*[0-9]+\s+\|(?:\s+[0-9]{1,2}:[0-9]{2}[.:][0-9]{2}\s+\|){2}\s+([0-9]+)\s+\|\s+([0-9]+)\s*"
            )
            .unwrap();
        }

        let Some(captures) = TOC_ROW.captures(line) else {
            return self.sectors == 0;
        };

        // Sector fields too wide for u32, or a row ending before it starts,
        // cannot come from a real rip log. Treat such lines like noise.
        let (Ok(start), Ok(end)) = (captures[1].parse::<u32>(), captures[2].parse::<u32>()) else {
            return self.sectors == 0;
        };
        if end < start {
            return self.sectors == 0;
        }

        let length = end - start + 1;

        if self.sectors == 0 {
            self.sectors += start + LEAD_IN_SECTORS;
        }
        self.sectors += length;

        self.offsets.push(start + LEAD_IN_SECTORS);

        true
    }

    /// Whether at least one TOC row has been recognized.
    pub fn is_parsed(&self) -> bool {
        self.sectors > 0
    }

    pub fn track_count(&self) -> usize {
        self.offsets.len()
    }

    /// Total sector count including the lead-in, 0 until the first TOC row.
    pub fn total_sectors(&self) -> u32 {
        self.sectors
    }

    /// Disc-relative track offsets in order of appearance.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Disc ID for the accumulated geometry, `None` until a TOC was found.
    ///
    /// The fingerprinter runs at most once per parser instance.
    pub fn disc_id(&mut self, fingerprinter: &impl DiscFingerprinter) -> Option<&str> {
        if !self.is_parsed() {
            return None;
        }

        if self.disc_id.is_none() {
            self.disc_id = Some(fingerprinter.fingerprint(
                self.track_count() as u32,
                self.sectors,
                &self.offsets,
            ));
        }

        self.disc_id.as_deref()
    }

    /// TOC attach URL for submitting this disc, `None` until a TOC was found.
    pub fn submission_url(&self) -> Option<String> {
        if !self.is_parsed() {
            return None;
        }

        let mut url = format!(
            "{SUBMISSION_BASE_URL}?toc=1%20{}%20{}",
            self.track_count(),
            self.sectors
        );
        for offset in &self.offsets {
            url.push_str(&format!("%20{offset}"));
        }

        Some(url)
    }

    /// Releases already attached to this disc, excluding CD stubs.
    ///
    /// The result of the first successful lookup is cached; a failed lookup
    /// leaves the cache empty so the caller may retry.
    pub async fn releases<S: ReleaseSource>(
        &mut self,
        source: &mut S,
        fingerprinter: &impl DiscFingerprinter,
    ) -> MusicBrainzResult<&[Release]> {
        let Some(disc_id) = self.disc_id(fingerprinter).map(str::to_owned) else {
            return Ok(&[]);
        };

        if self.releases.is_none() {
            self.releases = Some(source.releases_by_disc_id(&disc_id).await?);
        }

        Ok(self.releases.as_deref().unwrap_or(&[]))
    }
}

/// Feeds `parser` from `reader` until the TOC block ends or input runs out.
pub async fn scan_lines<R>(parser: &mut TocParser, reader: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if !parser.consume_line(&line) {
            break;
        }
    }

    Ok(())
}

pub async fn scan_file(parser: &mut TocParser, path: &Path) -> std::io::Result<()> {
    debug!("Reading rip log: {path:?}");

    let file = File::open(path).await?;

    scan_lines(parser, BufReader::new(file)).await
}

/// Like [`scan_lines`], but a Ctrl-C while waiting for the next line
/// finalizes with whatever was parsed so far instead of aborting.
pub async fn scan_interactive<R>(parser: &mut TocParser, reader: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) if parser.consume_line(&line) => {}
                _ => break,
            },
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted, finalizing with the current TOC state");
                break;
            }
        }
    }

    Ok(())
}
