use serde::{Deserialize, Serialize};

/// A laboratory area (e.g. hematology, microbiology) belonging to a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: u64,
    pub name: String,
    /// Free-form area type as reported by the backend.
    #[serde(rename = "type")]
    pub kind: String,
    pub is_external: bool,
    pub is_active: bool,
    pub branch_id: u64,
}

impl Area {
    /// Creates an active, internal area.
    pub fn new(id: u64, name: impl Into<String>, kind: impl Into<String>, branch_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            is_external: false,
            is_active: true,
            branch_id,
        }
    }

    /// Sets the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the external flag.
    pub fn with_external(mut self, is_external: bool) -> Self {
        self.is_external = is_external;
        self
    }
}

/// A section inside an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: u64,
    pub name: String,
    pub is_active: bool,
}

impl Section {
    /// Creates an active section.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
        }
    }

    /// Sets the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
