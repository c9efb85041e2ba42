//! labdesk-client CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use labdesk_client::cli::areas::AreasAction;
use labdesk_client::cli::sections::SectionsAction;
use labdesk_client::cli::{Cli, Commands};
use labdesk_client::output::{format_change, format_output};
use labdesk_client::LabdeskClient;
use labdesk_core::area::{
    active_areas, active_sections_of, validate_create_area, validate_create_section,
    validate_update_area, validate_update_section, AreaCatalog, CreateAreaRequest,
    CreateSectionRequest, UpdateSectionRequest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "warn"
    } else {
        "labdesk_client=info,labdesk_core=info"
    };

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config()?;
    tracing::debug!(base_url = %config.base_url, "Using API");
    let catalog = AreaCatalog::new(Arc::new(LabdeskClient::new(&config)?));
    let format = cli.format;

    let output = match cli.command {
        Commands::Areas(areas_cmd) => match areas_cmd.action {
            AreasAction::List { active } => {
                let mut areas = catalog.areas().await?;
                if active {
                    areas = active_areas(&areas).into_iter().cloned().collect();
                }
                format_output(&areas, format)
            }
            AreasAction::Create {
                name,
                kind,
                branch_id,
                external,
            } => {
                let req = CreateAreaRequest::new(name, kind, branch_id).external(external);
                validate_create_area(&req)?;
                let area = catalog.create_area(&req).await?;
                format_change("Created", &area, format)
            }
            AreasAction::Update { id, update } => {
                let req = update.into_request();
                validate_update_area(&req)?;
                let area = catalog.update_area(id, &req).await?;
                format_change("Updated", &area, format)
            }
        },
        Commands::Sections(sections_cmd) => match sections_cmd.action {
            SectionsAction::List { area_id, active } => {
                let mut sections = catalog.sections(area_id).await?;
                if active {
                    sections = active_sections_of(sections);
                }
                format_output(&sections, format)
            }
            SectionsAction::Active => format_output(&catalog.active_sections().await?, format),
            SectionsAction::Create { area_id, name } => {
                let req = CreateSectionRequest::new(name);
                validate_create_section(&req)?;
                let section = catalog.create_section(area_id, &req).await?;
                format_change("Created", &section, format)
            }
            SectionsAction::Update {
                area_id,
                id,
                name,
                active,
            } => {
                let req = UpdateSectionRequest {
                    name,
                    is_active: active,
                };
                validate_update_section(&req)?;
                let section = catalog.update_section(area_id, id, &req).await?;
                format_change("Updated", &section, format)
            }
        },
    };

    println!("{}", output);
    Ok(())
}
