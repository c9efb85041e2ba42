//! Decoding of list responses.
//!
//! Some backend endpoints return a bare JSON array, others wrap the page in
//! an envelope such as `{"data": [...], "total": 42}`. Both decode to a
//! plain `Vec<T>`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;

/// A list response in either of the shapes the backend produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Paged { data: Vec<T> },
}

impl<T> ListPayload<T> {
    /// Unwraps the items, discarding any paging metadata.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Paged { data } => data,
        }
    }
}

/// Decodes a list response body into its items.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    let payload: ListPayload<T> = serde_json::from_slice(body)?;
    Ok(payload.into_items())
}
