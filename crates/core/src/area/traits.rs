use async_trait::async_trait;

use crate::error::Result;

use super::requests::{
    CreateAreaRequest, CreateSectionRequest, UpdateAreaRequest, UpdateSectionRequest,
};
use super::types::{Area, Section};

/// Backend operations on areas and their sections.
///
/// Implementations perform the raw I/O and do no caching; [`AreaCatalog`]
/// layers caching on top.
///
/// [`AreaCatalog`]: super::AreaCatalog
#[async_trait]
pub trait AreaSource: Send + Sync {
    /// Lists every area (`GET /areas`).
    async fn list_areas(&self) -> Result<Vec<Area>>;

    /// Lists the sections of one area (`GET /areas/{area_id}/sections`).
    async fn list_sections(&self, area_id: u64) -> Result<Vec<Section>>;

    /// Creates an area.
    async fn create_area(&self, req: &CreateAreaRequest) -> Result<Area>;

    /// Updates an area.
    async fn update_area(&self, id: u64, req: &UpdateAreaRequest) -> Result<Area>;

    /// Creates a section inside an area.
    async fn create_section(&self, area_id: u64, req: &CreateSectionRequest) -> Result<Section>;

    /// Updates a section of an area.
    async fn update_section(
        &self,
        area_id: u64,
        id: u64,
        req: &UpdateSectionRequest,
    ) -> Result<Section>;
}
