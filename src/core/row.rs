use serde::{Deserialize, Serialize};

/// One record of a list. `value` is rendered as the URL, the data value or
/// the remark depending on the list it belongs to. Rows have no identity of
/// their own; their position in the list is their identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    pub value: String,
}

impl Row {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
