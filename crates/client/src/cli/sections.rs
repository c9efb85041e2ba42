//! Section CLI commands.

use clap::{Parser, Subcommand};

/// Section management commands.
#[derive(Debug, Parser)]
pub struct SectionsCommand {
    #[command(subcommand)]
    pub action: SectionsAction,
}

/// Available section actions.
#[derive(Debug, Subcommand)]
pub enum SectionsAction {
    /// List the sections of one area.
    List {
        /// Area ID.
        area_id: u64,
        /// Only show active sections.
        #[arg(long)]
        active: bool,
    },
    /// List the active sections of every active area.
    Active,
    /// Create a section inside an area.
    Create {
        /// Area ID.
        area_id: u64,
        /// Section name.
        #[arg(long)]
        name: String,
    },
    /// Update a section.
    Update {
        /// Area ID.
        area_id: u64,
        /// Section ID.
        id: u64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// Whether the section is active.
        #[arg(long)]
        active: Option<bool>,
    },
}
