use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::row::Row;

/// A write directive for the script endpoint.
///
/// `row_index` is 0-based into the data rows as currently displayed. The
/// server owns the translation to its own row numbering; see
/// [`sheet_row_index`]. Getting this wrong silently deletes the wrong row,
/// so the adjustment lives in exactly one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRequest {
    pub action: WriteAction,
    pub gid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_data: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    Append,
    Delete,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WriteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl WriteRequest {
    pub fn append(gid: &str, row: &Row) -> Self {
        Self {
            action: WriteAction::Append,
            gid: gid.to_string(),
            row_data: Some(row_data(gid, row)),
            row_index: None,
        }
    }

    pub fn delete(gid: &str, row_index: usize) -> Self {
        Self {
            action: WriteAction::Delete,
            gid: gid.to_string(),
            row_data: None,
            row_index: Some(row_index),
        }
    }
}

/// The column layout the sheet server applies per tab id.
pub fn columns_for_gid(gid: &str) -> &'static [&'static str] {
    match gid {
        "0" => &["Name", "URL"],
        "997844508" => &["資料", "數值"],
        "2063120752" => &["任務名稱"],
        _ => &[],
    }
}

/// Map a row onto the column names the server expects for `gid`. Tabs with
/// a single column take only the name; unknown tabs fall back to generic
/// column names.
pub fn row_data(gid: &str, row: &Row) -> HashMap<String, String> {
    let mut map = HashMap::new();
    match columns_for_gid(gid) {
        [name_col, value_col] => {
            map.insert((*name_col).to_string(), row.name.clone());
            map.insert((*value_col).to_string(), row.value.clone());
        }
        [name_col] => {
            map.insert((*name_col).to_string(), row.name.clone());
        }
        _ => {
            map.insert("Name".to_string(), row.name.clone());
            map.insert("Value".to_string(), row.value.clone());
        }
    }
    map
}

/// Translate a 0-based client row index into the backing sheet's row number:
/// +1 for the header row, +1 because sheet rows count from 1.
pub fn sheet_row_index(row_index: usize) -> usize {
    row_index + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_request_wire_shape() {
        let req = WriteRequest::append("0", &Row::new("Docs", "https://x.test"));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["action"], "append");
        assert_eq!(json["gid"], "0");
        assert_eq!(json["rowData"]["Name"], "Docs");
        assert_eq!(json["rowData"]["URL"], "https://x.test");
        assert!(json.get("rowIndex").is_none());
    }

    #[test]
    fn delete_request_wire_shape() {
        let req = WriteRequest::delete("997844508", 3);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["action"], "delete");
        assert_eq!(json["rowIndex"], 3);
        assert!(json.get("rowData").is_none());
    }

    #[test]
    fn tab_column_layouts() {
        assert_eq!(columns_for_gid("0"), ["Name", "URL"]);
        assert_eq!(columns_for_gid("997844508"), ["資料", "數值"]);
        assert_eq!(columns_for_gid("2063120752"), ["任務名稱"]);
        assert!(columns_for_gid("12345").is_empty());
    }

    #[test]
    fn single_column_tab_takes_only_the_name() {
        let data = row_data("2063120752", &Row::new("buy milk", "ignored"));
        assert_eq!(data.len(), 1);
        assert_eq!(data["任務名稱"], "buy milk");
    }

    #[test]
    fn client_index_to_sheet_row() {
        assert_eq!(sheet_row_index(0), 2);
        assert_eq!(sheet_row_index(5), 7);
    }

    #[test]
    fn response_message_defaults_to_empty() {
        let resp: WriteResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.message.is_empty());
    }
}
