pub mod protocol;
pub mod script;
pub mod sheets;
pub mod static_file;

use reqwest::Client;

use crate::core::row::Row;
use crate::error::{Error, Result};
use protocol::{WriteRequest, WriteResponse};
use script::ScriptClient;
use sheets::SheetsClient;
use static_file::StaticFileClient;

/// One of the three interchangeable remote backends. Every strategy can
/// fetch; only some can write. Failures of any kind surface as
/// `RemoteUnavailable` and callers fall back to the local cache — nothing
/// here is ever fatal to the lists.
#[derive(Debug, Clone)]
pub enum RemoteSource {
    Sheets(SheetsClient),
    StaticFile(StaticFileClient),
    Script(ScriptClient),
}

impl RemoteSource {
    pub async fn fetch(&self, gid: &str) -> Result<Vec<Row>> {
        match self {
            Self::Sheets(client) => client.fetch(gid).await,
            Self::StaticFile(client) => client.fetch().await,
            Self::Script(client) => client.fetch(gid).await,
        }
    }

    pub fn supports_writes(&self) -> bool {
        !matches!(self, Self::StaticFile(_))
    }

    /// Best-effort mirror of a local append. For the static-file backend
    /// there is nothing to mirror and this is a no-op.
    pub async fn append(&self, gid: &str, row: &Row) -> Result<()> {
        match self {
            Self::Sheets(client) => client.append(gid, row).await,
            Self::StaticFile(_) => Ok(()),
            Self::Script(client) => client.append(gid, row).await,
        }
    }

    /// Best-effort mirror of a local positional delete. `index` is 0-based
    /// into the data rows; the server side owns any further adjustment.
    pub async fn delete(&self, gid: &str, index: usize) -> Result<()> {
        match self {
            Self::Sheets(client) => client.delete(gid, index).await,
            Self::StaticFile(_) => Ok(()),
            Self::Script(client) => client.delete(gid, index).await,
        }
    }
}

/// POST a write directive and interpret the `{success, message}` reply.
pub(crate) async fn post_write(http: &Client, url: &str, req: &WriteRequest) -> Result<()> {
    let resp = http
        .post(url)
        .json(req)
        .send()
        .await
        .map_err(|e| Error::RemoteUnavailable(format!("write post failed: {e}")))?;
    if !resp.status().is_success() {
        return Err(Error::RemoteUnavailable(format!(
            "write endpoint returned {}",
            resp.status()
        )));
    }
    let body: WriteResponse = resp
        .json()
        .await
        .map_err(|e| Error::RemoteUnavailable(format!("failed to decode write reply: {e}")))?;
    if body.success {
        Ok(())
    } else {
        Err(Error::RemoteUnavailable(format!(
            "write rejected: {}",
            body.message
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_remote_unavailable() {
        // Port 9 (discard) is closed; connect fails immediately.
        let client = StaticFileClient::new("http://127.0.0.1:9/links.csv").unwrap();
        let err = RemoteSource::StaticFile(client)
            .fetch("0")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RemoteUnavailable(_)));
    }

    #[tokio::test]
    async fn static_file_writes_are_noops() {
        let client = StaticFileClient::new("http://127.0.0.1:9/links.csv").unwrap();
        let remote = RemoteSource::StaticFile(client);
        assert!(!remote.supports_writes());
        assert!(remote.append("0", &Row::new("a", "https://x.test")).await.is_ok());
        assert!(remote.delete("0", 0).await.is_ok());
    }
}
