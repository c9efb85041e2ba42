mod shared;

pub use shared::{CacheState, SharedCache};
