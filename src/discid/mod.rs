use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha1::{Digest, Sha1};

/// First track number on an audio CD.
const FIRST_TRACK: u32 = 1;

/// Number of track offset slots hashed into a Disc ID.
const OFFSET_SLOTS: usize = 99;

/// Derives a disc fingerprint from parsed TOC geometry.
pub trait DiscFingerprinter {
    fn fingerprint(&self, track_count: u32, total_sectors: u32, offsets: &[u32]) -> String;
}

/// The MusicBrainz Disc ID: SHA-1 over a fixed-width hex rendering of the
/// TOC, base64-encoded with `+` -> `.`, `/` -> `_` and `=` -> `-` so the
/// identifier stays URL-safe. Always 28 characters.
pub struct MbDiscId;

impl DiscFingerprinter for MbDiscId {
    fn fingerprint(&self, track_count: u32, total_sectors: u32, offsets: &[u32]) -> String {
        let mut hasher = Sha1::new();

        hasher.update(format!("{FIRST_TRACK:02X}"));
        hasher.update(format!("{track_count:02X}"));

        // Slot 0 carries the lead-out offset, slots 1..=99 the track offsets.
        hasher.update(format!("{total_sectors:08X}"));
        for slot in 0..OFFSET_SLOTS {
            let offset = offsets.get(slot).copied().unwrap_or(0);
            hasher.update(format!("{offset:08X}"));
        }

        encode_digest(hasher.finalize().as_slice())
    }
}

fn encode_digest(digest: &[u8]) -> String {
    STANDARD
        .encode(digest)
        .chars()
        .map(|c| match c {
            '+' => '.',
            '/' => '_',
            '=' => '-',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_published_reference_disc() {
        // TOC "1 6 95462 150 15363 32314 46592 63414 80489" from the
        // MusicBrainz Disc ID calculation documentation.
        let id = MbDiscId.fingerprint(6, 95462, &[150, 15363, 32314, 46592, 63414, 80489]);

        assert_eq!(id, "49HHV7Eb8UKF3aQiNmu1GR8vKTY-");
    }

    #[test]
    fn absent_tracks_hash_as_zero_slots() {
        let id = MbDiscId.fingerprint(1, 20683, &[150]);

        assert_eq!(id, "KBh9l9YB9MYmkLd81CgvX0XBtys-");
        assert_eq!(id.len(), 28);
    }
}
