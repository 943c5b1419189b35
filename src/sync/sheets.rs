use reqwest::Client;

use crate::core::row::Row;
use crate::csv::parser::CsvParser;
use crate::error::{Error, Result};
use crate::sync::protocol::WriteRequest;
use crate::sync::post_write;

const EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// Spreadsheet backend: reads go through the public CSV export endpoint,
/// writes through the script endpoint.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    sheet_id: String,
    script_url: String,
    http: Client,
}

impl SheetsClient {
    pub fn new(sheet_id: &str, script_url: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| Error::RemoteUnavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            sheet_id: sheet_id.to_string(),
            script_url: script_url.to_string(),
            http,
        })
    }

    pub async fn fetch(&self, gid: &str) -> Result<Vec<Row>> {
        let url = format!(
            "{EXPORT_BASE}/{}/gviz/tq?tqx=out:csv&gid={gid}",
            self.sheet_id
        );
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::RemoteUnavailable(format!("CSV export fetch failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(Error::RemoteUnavailable(format!(
                "CSV export returned {}",
                resp.status()
            )));
        }
        let text = resp
            .text()
            .await
            .map_err(|e| Error::RemoteUnavailable(format!("failed to read CSV export: {e}")))?;
        Ok(CsvParser::parse(&text))
    }

    pub async fn append(&self, gid: &str, row: &Row) -> Result<()> {
        post_write(&self.http, &self.script_url, &WriteRequest::append(gid, row)).await
    }

    pub async fn delete(&self, gid: &str, index: usize) -> Result<()> {
        post_write(&self.http, &self.script_url, &WriteRequest::delete(gid, index)).await
    }
}
