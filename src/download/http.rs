use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::Result;

/// Source of raw workbook bytes for a URL.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Blocking HTTP GET fetcher.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        info!(%url, "downloading workbook");

        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let status = response.status();
        let body = response.bytes()?;

        debug!(%status, bytes = body.len(), "download finished");

        Ok(body.to_vec())
    }
}
