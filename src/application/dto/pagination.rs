use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u64>,
    pub has_more: bool,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, next_offset: Option<u64>) -> Self {
        let has_more = next_offset.is_some();
        Self {
            items,
            next_offset,
            has_more,
        }
    }
}
