//! Write payloads for areas and sections.
//!
//! Pure data types shared by every `AreaSource` implementation.

use serde::{Deserialize, Serialize};

/// Request payload for creating an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAreaRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub branch_id: u64,
    #[serde(default)]
    pub is_external: bool,
}

impl CreateAreaRequest {
    /// Create a request for an internal area.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, branch_id: u64) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            branch_id,
            is_external: false,
        }
    }

    /// Mark the area as external.
    pub fn external(mut self, is_external: bool) -> Self {
        self.is_external = is_external;
        self
    }
}

/// Request payload for updating an area. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAreaRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_external: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<u64>,
}

impl UpdateAreaRequest {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.is_external.is_none()
            && self.is_active.is_none()
            && self.branch_id.is_none()
    }
}

/// Request payload for creating a section inside an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    pub name: String,
}

impl CreateSectionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request payload for updating a section. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateSectionRequest {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_active.is_none()
    }
}
