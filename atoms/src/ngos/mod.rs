pub mod model;
pub mod store;

pub use model::Ngo;
pub use store::BaseNgoStore;
