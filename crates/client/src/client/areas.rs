//! Area and section API operations.

use async_trait::async_trait;
use labdesk_core::area::{
    Area, AreaSource, CreateAreaRequest, CreateSectionRequest, Section, UpdateAreaRequest,
    UpdateSectionRequest,
};
use labdesk_core::Result;
use reqwest::Method;

use super::LabdeskClient;

#[async_trait]
impl AreaSource for LabdeskClient {
    async fn list_areas(&self) -> Result<Vec<Area>> {
        let path = "/areas";
        self.send_list(self.request(Method::GET, path), path).await
    }

    async fn list_sections(&self, area_id: u64) -> Result<Vec<Section>> {
        let path = format!("/areas/{}/sections", area_id);
        self.send_list(self.request(Method::GET, &path), &path).await
    }

    async fn create_area(&self, req: &CreateAreaRequest) -> Result<Area> {
        let path = "/areas";
        self.send_json(self.request(Method::POST, path).json(req), path).await
    }

    async fn update_area(&self, id: u64, req: &UpdateAreaRequest) -> Result<Area> {
        let path = format!("/areas/{}", id);
        self.send_json(self.request(Method::PUT, &path).json(req), &path).await
    }

    async fn create_section(&self, area_id: u64, req: &CreateSectionRequest) -> Result<Section> {
        let path = format!("/areas/{}/sections", area_id);
        self.send_json(self.request(Method::POST, &path).json(req), &path).await
    }

    async fn update_section(
        &self,
        area_id: u64,
        id: u64,
        req: &UpdateSectionRequest,
    ) -> Result<Section> {
        let path = format!("/areas/{}/sections/{}", area_id, id);
        self.send_json(self.request(Method::PUT, &path).json(req), &path).await
    }
}
