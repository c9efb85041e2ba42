//! Cached view over areas and their sections.
//!
//! [`AreaCatalog`] wraps an [`AreaSource`] with two [`SharedCache`]s:
//!
//! - **areas**: the raw `GET /areas` collection
//! - **active sections**: every active section of every active area,
//!   derived from the cached areas with one section fetch per active area
//!
//! Writes go straight to the source and invalidate whatever they make stale.

use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::cache::{CacheState, SharedCache};
use crate::error::Result;

use super::operations::{active_areas, flatten_active_sections};
use super::requests::{
    CreateAreaRequest, CreateSectionRequest, UpdateAreaRequest, UpdateSectionRequest,
};
use super::traits::AreaSource;
use super::types::{Area, Section};

/// Area and section access with shared-replay caching.
pub struct AreaCatalog<S>
where
    S: AreaSource,
{
    source: Arc<S>,
    areas: Arc<SharedCache<Vec<Area>>>,
    active_sections: SharedCache<Vec<Section>>,
}

impl<S> AreaCatalog<S>
where
    S: AreaSource + 'static,
{
    /// Creates a catalog with empty caches.
    pub fn new(source: Arc<S>) -> Self {
        let areas = Arc::new(SharedCache::new("areas", {
            let source = source.clone();
            move || {
                let source = source.clone();
                async move { source.list_areas().await }
            }
        }));

        let active_sections = SharedCache::new("active_sections", {
            let source = source.clone();
            let areas = areas.clone();
            move || {
                let source = source.clone();
                let areas = areas.clone();
                async move { collect_active_sections(source.as_ref(), &areas).await }
            }
        });

        Self {
            source,
            areas,
            active_sections,
        }
    }

    /// Returns all areas, cached.
    pub async fn areas(&self) -> Result<Vec<Area>> {
        self.areas.get().await
    }

    /// Returns the sections of one area. Not cached.
    pub async fn sections(&self, area_id: u64) -> Result<Vec<Section>> {
        self.source.list_sections(area_id).await
    }

    /// Returns the active sections of all active areas, in area order, cached.
    pub async fn active_sections(&self) -> Result<Vec<Section>> {
        self.active_sections.get().await
    }

    /// Resets the areas cache and the active sections derived from it.
    pub fn invalidate_areas(&self) {
        self.areas.invalidate();
        self.active_sections.invalidate();
    }

    /// Resets only the active sections cache.
    pub fn invalidate_sections(&self) {
        self.active_sections.invalidate();
    }

    /// State of the areas cache.
    pub fn areas_state(&self) -> CacheState {
        self.areas.state()
    }

    /// State of the active sections cache.
    pub fn active_sections_state(&self) -> CacheState {
        self.active_sections.state()
    }

    /// Creates an area, then invalidates both caches.
    pub async fn create_area(&self, req: &CreateAreaRequest) -> Result<Area> {
        let area = self.source.create_area(req).await?;
        self.invalidate_areas();
        tracing::debug!(area_id = area.id, name = %area.name, "Area created");
        Ok(area)
    }

    /// Updates an area, then invalidates both caches.
    pub async fn update_area(&self, id: u64, req: &UpdateAreaRequest) -> Result<Area> {
        let area = self.source.update_area(id, req).await?;
        self.invalidate_areas();
        tracing::debug!(area_id = id, "Area updated");
        Ok(area)
    }

    /// Creates a section, then invalidates the active sections cache.
    pub async fn create_section(
        &self,
        area_id: u64,
        req: &CreateSectionRequest,
    ) -> Result<Section> {
        let section = self.source.create_section(area_id, req).await?;
        self.invalidate_sections();
        tracing::debug!(area_id, section_id = section.id, "Section created");
        Ok(section)
    }

    /// Updates a section, then invalidates the active sections cache.
    pub async fn update_section(
        &self,
        area_id: u64,
        id: u64,
        req: &UpdateSectionRequest,
    ) -> Result<Section> {
        let section = self.source.update_section(area_id, id, req).await?;
        self.invalidate_sections();
        tracing::debug!(area_id, section_id = id, "Section updated");
        Ok(section)
    }
}

async fn collect_active_sections<S>(
    source: &S,
    areas: &SharedCache<Vec<Area>>,
) -> Result<Vec<Section>>
where
    S: AreaSource + ?Sized,
{
    let areas = areas.get().await?;
    let active = active_areas(&areas);

    if active.is_empty() {
        tracing::debug!("No active areas, skipping section fetches");
        return Ok(Vec::new());
    }

    tracing::debug!(areas = active.len(), "Fetching sections of active areas");
    // try_join_all keeps input order and fails on the first error.
    let per_area = try_join_all(active.iter().map(|area| source.list_sections(area.id))).await?;

    Ok(flatten_active_sections(per_area))
}
