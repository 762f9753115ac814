use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MusicBrainzError {
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error("MusicBrainz returned a non-success status code: {0}, body: {1}")]
    NoSuccessStatusCode(StatusCode, String),
}

pub type MusicBrainzResult<T> = Result<T, MusicBrainzError>;
