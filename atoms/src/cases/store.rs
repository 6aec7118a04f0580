use async_trait::async_trait;

use super::model::Case;
use crate::error::Result;

/// Persistence for case records.
#[async_trait]
pub trait BaseCaseStore: Send + Sync {
    /// Write a brand new case keyed by `case.case_id`.
    async fn put_case(&self, case: &Case) -> Result<()>;

    /// Every stored case. Implementations page internally and only return
    /// once the whole table has been read.
    async fn scan_cases(&self) -> Result<Vec<Case>>;
}
