use serde::Deserialize;

/// Body of a `ws/2/discid/<id>` lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscIdLookupResponse {
    #[serde(default)]
    pub releases: Vec<Release>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: String,
    pub title: String,
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistCredit {
    pub name: String,
    #[serde(default)]
    pub joinphrase: String,
}

impl Release {
    /// Credit line the way MusicBrainz renders it, e.g. `Artist A & Artist B`.
    pub fn artist(&self) -> String {
        self.artist_credit
            .iter()
            .map(|credit| format!("{}{}", credit.name, credit.joinphrase))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_discid_lookup() {
        let body = r#"{
            "id": "49HHV7Eb8UKF3aQiNmu1GR8vKTY-",
            "sectors": 95462,
            "releases": [
                {
                    "id": "7c1014eb-454c-3ee8-9c63-0e3e92998290",
                    "title": "Some Album",
                    "artist-credit": [
                        { "name": "Some Artist", "joinphrase": "" }
                    ]
                }
            ]
        }"#;

        let parsed: DiscIdLookupResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.releases.len(), 1);
        assert_eq!(parsed.releases[0].title, "Some Album");
        assert_eq!(parsed.releases[0].artist(), "Some Artist");
    }

    #[test]
    fn joins_multi_artist_credits_with_their_joinphrases() {
        let release = Release {
            id: "x".to_string(),
            title: "Split Single".to_string(),
            artist_credit: vec![
                ArtistCredit {
                    name: "Artist A".to_string(),
                    joinphrase: " & ".to_string(),
                },
                ArtistCredit {
                    name: "Artist B".to_string(),
                    joinphrase: String::new(),
                },
            ],
        };

        assert_eq!(release.artist(), "Artist A & Artist B");
    }

    #[test]
    fn missing_credit_list_defaults_to_empty() {
        let body = r#"{ "releases": [ { "id": "a", "title": "b" } ] }"#;

        let parsed: DiscIdLookupResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.releases[0].artist(), "");
    }
}
