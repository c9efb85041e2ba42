//! Area CLI commands.

use clap::{Args, Parser, Subcommand};
use labdesk_core::area::UpdateAreaRequest;

/// Area management commands.
#[derive(Debug, Parser)]
pub struct AreasCommand {
    #[command(subcommand)]
    pub action: AreasAction,
}

/// Available area actions.
#[derive(Debug, Subcommand)]
pub enum AreasAction {
    /// List all areas.
    List {
        /// Only show active areas.
        #[arg(long)]
        active: bool,
    },
    /// Create a new area.
    Create {
        /// Area name.
        #[arg(long)]
        name: String,
        /// Area type.
        #[arg(long = "type")]
        kind: String,
        /// Branch the area belongs to.
        #[arg(long)]
        branch_id: u64,
        /// Mark the area as external.
        #[arg(long)]
        external: bool,
    },
    /// Update an area.
    Update {
        /// Area ID.
        id: u64,
        #[command(flatten)]
        update: AreaUpdateArgs,
    },
}

/// Fields that can be changed on an area.
#[derive(Debug, Args)]
pub struct AreaUpdateArgs {
    /// New name.
    #[arg(long)]
    pub name: Option<String>,
    /// New area type.
    #[arg(long = "type")]
    pub kind: Option<String>,
    /// Whether the area is external.
    #[arg(long)]
    pub external: Option<bool>,
    /// Whether the area is active.
    #[arg(long)]
    pub active: Option<bool>,
    /// New branch.
    #[arg(long)]
    pub branch_id: Option<u64>,
}

impl AreaUpdateArgs {
    /// Convert into the API update payload.
    pub fn into_request(self) -> UpdateAreaRequest {
        UpdateAreaRequest {
            name: self.name,
            kind: self.kind,
            is_external: self.external,
            is_active: self.active,
            branch_id: self.branch_id,
        }
    }
}

