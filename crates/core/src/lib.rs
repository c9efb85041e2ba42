//! labdesk_core - types and response caching for the labdesk back office client.

pub mod area;
pub mod cache;
pub mod error;
pub mod payload;

pub use error::{FetchError, Result};
