use const_format::concatcp;
use lazy_static::lazy_static;
use reqwest::Client;

pub const USER_AGENT: &str = concatcp!("log-to-toc/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    pub static ref CLIENT: Client = Client::new();
}
