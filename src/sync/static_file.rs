use reqwest::Client;

use crate::core::row::Row;
use crate::csv::parser::CsvParser;
use crate::error::{Error, Result};

/// Read-only backend: a fixed CSV resource. There is no write path; every
/// mutation stays in the local cache.
#[derive(Debug, Clone)]
pub struct StaticFileClient {
    url: String,
    http: Client,
}

impl StaticFileClient {
    pub fn new(url: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| Error::RemoteUnavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            url: url.to_string(),
            http,
        })
    }

    pub async fn fetch(&self) -> Result<Vec<Row>> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::RemoteUnavailable(format!("CSV fetch failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(Error::RemoteUnavailable(format!(
                "GET {} returned {}",
                self.url,
                resp.status()
            )));
        }
        let text = resp
            .text()
            .await
            .map_err(|e| Error::RemoteUnavailable(format!("failed to read CSV body: {e}")))?;
        Ok(CsvParser::parse(&text))
    }
}
