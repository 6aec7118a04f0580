pub mod model;
pub mod store;

pub use model::{image_key, IMAGE_CONTENT_TYPE};
pub use store::BaseObjectStore;
