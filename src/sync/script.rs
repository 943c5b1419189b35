use reqwest::Client;

use crate::core::row::Row;
use crate::error::{Error, Result};
use crate::sync::post_write;
use crate::sync::protocol::WriteRequest;

/// Script backend: one endpoint serves both directions. Reads return the
/// rows as JSON directly, so no CSV decoding is involved.
#[derive(Debug, Clone)]
pub struct ScriptClient {
    url: String,
    http: Client,
}

impl ScriptClient {
    pub fn new(url: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| Error::RemoteUnavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            url: url.to_string(),
            http,
        })
    }

    pub async fn fetch(&self, gid: &str) -> Result<Vec<Row>> {
        let resp = self
            .http
            .get(&self.url)
            .query(&[("gid", gid)])
            .send()
            .await
            .map_err(|e| Error::RemoteUnavailable(format!("script fetch failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(Error::RemoteUnavailable(format!(
                "script endpoint returned {}",
                resp.status()
            )));
        }
        resp.json()
            .await
            .map_err(|e| Error::RemoteUnavailable(format!("failed to decode script rows: {e}")))
    }

    pub async fn append(&self, gid: &str, row: &Row) -> Result<()> {
        post_write(&self.http, &self.url, &WriteRequest::append(gid, row)).await
    }

    pub async fn delete(&self, gid: &str, index: usize) -> Result<()> {
        post_write(&self.http, &self.url, &WriteRequest::delete(gid, index)).await
    }
}
