// Re-export model types and the store seam
pub mod model;
pub mod store;

pub use model::{Case, CaseResult, CaseStatus};
pub use store::BaseCaseStore;
