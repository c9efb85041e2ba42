mod catalog;
mod error;
mod operations;
mod requests;
mod traits;
mod types;

pub use catalog::AreaCatalog;
pub use error::AreaError;
pub use operations::{
    active_areas, active_sections_of, flatten_active_sections, validate_create_area,
    validate_create_section, validate_update_area, validate_update_section, MAX_NAME_LEN,
};
pub use requests::{
    CreateAreaRequest, CreateSectionRequest, UpdateAreaRequest, UpdateSectionRequest,
};
pub use traits::AreaSource;
pub use types::{Area, Section};
