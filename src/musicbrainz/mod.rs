use crate::musicbrainz::error::{MusicBrainzError, MusicBrainzResult};
use crate::musicbrainz::model::{DiscIdLookupResponse, Release};
use crate::util::http::{CLIENT, USER_AGENT};
use log::debug;
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use tower::limit::RateLimit;
use tower::{Service, ServiceBuilder, ServiceExt};

pub mod error;
pub mod model;

/// Base URL of the MusicBrainz JSON web service.
const WS_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// TOC attach endpoint linked in submission URLs.
pub const SUBMISSION_BASE_URL: &str = "http://musicbrainz.org/cdtoc/attach";

/// Source of release records for a disc fingerprint.
pub trait ReleaseSource {
    async fn releases_by_disc_id(&mut self, disc_id: &str) -> MusicBrainzResult<Vec<Release>>;
}

pub struct MusicBrainzApi {
    client: Client,
    service: RateLimit<Client>,
    headers: reqwest::header::HeaderMap,
}

impl MusicBrainzApi {
    pub fn new() -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("User-Agent", USER_AGENT.parse()?);

        let client = CLIENT.clone();

        // MusicBrainz allows anonymous clients one request per second.
        let service = ServiceBuilder::new()
            .rate_limit(1, Duration::from_secs(1))
            .service(client.clone());

        Ok(Self {
            client,
            service,
            headers,
        })
    }

    async fn lookup_disc_id(&mut self, disc_id: &str) -> MusicBrainzResult<DiscIdLookupResponse> {
        let req = self
            .client
            .request(
                Method::GET,
                format!("{WS_BASE_URL}/discid/{disc_id}?fmt=json&inc=artist-credits&cdstubs=no"),
            )
            .headers(self.headers.clone())
            .build()?;

        debug!("Looking up Disc ID {disc_id}");

        let res = self.service.ready().await?.call(req).await?;

        // An unknown Disc ID answers 404, meaning "not yet submitted".
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(DiscIdLookupResponse::default());
        }

        if !res.status().is_success() {
            return Err(MusicBrainzError::NoSuccessStatusCode(
                res.status(),
                res.text().await?,
            ));
        }

        let parsed = res.json::<DiscIdLookupResponse>().await?;

        Ok(parsed)
    }
}

impl ReleaseSource for MusicBrainzApi {
    async fn releases_by_disc_id(&mut self, disc_id: &str) -> MusicBrainzResult<Vec<Release>> {
        Ok(self.lookup_disc_id(disc_id).await?.releases)
    }
}
