use async_trait::async_trait;

use super::model::{DetectedLabel, DetectionRequest};
use crate::error::Result;

/// Label detection over an image that is already in the object store.
///
/// Implementations only return labels at or above `request.min_confidence`
/// and at most `request.max_labels` of them, in the classifier's order.
#[async_trait]
pub trait BaseLabelClassifier: Send + Sync {
    async fn detect_labels(
        &self,
        object_key: &str,
        request: DetectionRequest,
    ) -> Result<Vec<DetectedLabel>>;
}
