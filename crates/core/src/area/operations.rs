use super::error::AreaError;
use super::requests::{
    CreateAreaRequest, CreateSectionRequest, UpdateAreaRequest, UpdateSectionRequest,
};
use super::types::{Area, Section};

/// Maximum length of an area or section name.
pub const MAX_NAME_LEN: usize = 100;

/// Keeps the active areas, preserving their order.
pub fn active_areas(areas: &[Area]) -> Vec<&Area> {
    areas.iter().filter(|area| area.is_active).collect()
}

/// Keeps the active sections of one area, preserving their order.
pub fn active_sections_of(sections: Vec<Section>) -> Vec<Section> {
    sections
        .into_iter()
        .filter(|section| section.is_active)
        .collect()
}

/// Filters each per-area section list to its active sections and
/// concatenates them in the order of `per_area`.
pub fn flatten_active_sections(per_area: Vec<Vec<Section>>) -> Vec<Section> {
    per_area.into_iter().flat_map(active_sections_of).collect()
}

fn validate_name(name: &str) -> Result<(), AreaError> {
    if name.trim().is_empty() {
        return Err(AreaError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AreaError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(())
}

/// Validates an area creation request before it is sent.
pub fn validate_create_area(req: &CreateAreaRequest) -> Result<(), AreaError> {
    validate_name(&req.name)?;
    if req.kind.trim().is_empty() {
        return Err(AreaError::EmptyKind);
    }
    Ok(())
}

/// Validates an area update request before it is sent.
pub fn validate_update_area(req: &UpdateAreaRequest) -> Result<(), AreaError> {
    if req.is_empty() {
        return Err(AreaError::EmptyUpdate);
    }
    if let Some(name) = &req.name {
        validate_name(name)?;
    }
    if req.kind.as_deref().is_some_and(|k| k.trim().is_empty()) {
        return Err(AreaError::EmptyKind);
    }
    Ok(())
}

/// Validates a section creation request before it is sent.
pub fn validate_create_section(req: &CreateSectionRequest) -> Result<(), AreaError> {
    validate_name(&req.name)
}

/// Validates a section update request before it is sent.
pub fn validate_update_section(req: &UpdateSectionRequest) -> Result<(), AreaError> {
    if req.is_empty() {
        return Err(AreaError::EmptyUpdate);
    }
    match &req.name {
        Some(name) => validate_name(name),
        None => Ok(()),
    }
}
