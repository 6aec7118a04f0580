use async_trait::async_trait;

use super::model::Ngo;
use crate::error::Result;

/// Read-only access to NGO service profiles.
#[async_trait]
pub trait BaseNgoStore: Send + Sync {
    /// `Ok(None)` when no NGO has this id.
    async fn get_ngo(&self, ngo_id: &str) -> Result<Option<Ngo>>;
}
