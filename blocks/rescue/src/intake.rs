use nivaran_atoms::cases::{BaseCaseStore, Case, CaseResult, CaseStatus};
use nivaran_atoms::labels::{AnimalVocabulary, BaseLabelClassifier, DetectionRequest};
use nivaran_atoms::media::{image_key, BaseObjectStore, IMAGE_CONTENT_TYPE};
use nivaran_atoms::Result;
use std::sync::Arc;

use crate::types::ReportCase;

/// Store photo -> classify -> decide status -> write case.
///
/// Every step is fatal: the first failure is returned and nothing after it
/// runs. The case record is written last and in one put, so a failed intake
/// never leaves a half-written case (the photo may stay behind as an orphan).
#[derive(Clone)]
pub struct IntakePipeline {
    object_store: Arc<dyn BaseObjectStore>,
    classifier: Arc<dyn BaseLabelClassifier>,
    cases: Arc<dyn BaseCaseStore>,
    vocabulary: AnimalVocabulary,
    detection: DetectionRequest,
}

impl IntakePipeline {
    pub fn new(
        object_store: Arc<dyn BaseObjectStore>,
        classifier: Arc<dyn BaseLabelClassifier>,
        cases: Arc<dyn BaseCaseStore>,
        vocabulary: AnimalVocabulary,
        detection: DetectionRequest,
    ) -> Self {
        Self {
            object_store,
            classifier,
            cases,
            vocabulary,
            detection,
        }
    }

    pub async fn report_case(&self, report: ReportCase) -> Result<CaseResult> {
        let case_id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        let key = image_key(&case_id);

        tracing::info!(
            "📥 report_case: case_id={}, image_bytes={}, latitude={:?}, longitude={:?}",
            case_id,
            report.image.len(),
            report.latitude,
            report.longitude,
        );

        self.object_store
            .put_object(&key, report.image, IMAGE_CONTENT_TYPE)
            .await
            .inspect_err(|e| tracing::error!("❌ Image upload failed: case_id={}, error={}", case_id, e))?;

        let detected = self
            .classifier
            .detect_labels(&key, self.detection)
            .await
            .inspect_err(|e| tracing::error!("❌ Label detection failed: case_id={}, error={}", case_id, e))?;

        let status = CaseStatus::from_detection(self.vocabulary.is_animal_detected(&detected));

        let case = Case {
            case_id,
            image_ref: key,
            labels: detected.into_iter().map(|label| label.name).collect(),
            message: status.message().to_string(),
            status,
            latitude: report.latitude,
            longitude: report.longitude,
            created_at: now,
        };

        self.cases
            .put_case(&case)
            .await
            .inspect_err(|e| tracing::error!("❌ Case write failed: case_id={}, error={}", case.case_id, e))?;

        tracing::info!(
            "✅ report_case: case_id={}, status={}, labels={:?}",
            case.case_id,
            case.status,
            case.labels,
        );

        Ok(case.to_result())
    }
}
