use async_trait::async_trait;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::types::{Image, Label, S3Object};
use aws_sdk_rekognition::Client as RekognitionClient;
use nivaran_atoms::labels::{BaseLabelClassifier, DetectedLabel, DetectionRequest};
use nivaran_atoms::{RescueError, Result};

/// Rekognition DetectLabels over objects in the images bucket.
#[derive(Clone)]
pub struct RekognitionClassifier {
    client: RekognitionClient,
    bucket: String,
}

impl RekognitionClassifier {
    pub fn new(client: RekognitionClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl BaseLabelClassifier for RekognitionClassifier {
    async fn detect_labels(
        &self,
        object_key: &str,
        request: DetectionRequest,
    ) -> Result<Vec<DetectedLabel>> {
        let image = Image::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&self.bucket)
                    .name(object_key)
                    .build(),
            )
            .build();

        let output = self
            .client
            .detect_labels()
            .image(image)
            .max_labels(request.max_labels)
            .min_confidence(request.min_confidence)
            .send()
            .await
            .map_err(|e| {
                RescueError::collaborator(format!(
                    "Rekognition detect_labels error: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let labels = detected_labels(output.labels(), request);
        tracing::info!("🏷️ Rekognition labels for {}: {:?}", object_key, labels);

        Ok(labels)
    }
}

/// Keep Rekognition's order; drop nameless labels and anything under the
/// floor or past the cap so callers never see more than they asked for.
pub fn detected_labels(labels: &[Label], request: DetectionRequest) -> Vec<DetectedLabel> {
    labels
        .iter()
        .filter_map(|label| {
            let name = label.name()?;
            let confidence = label.confidence().unwrap_or_default();
            (confidence >= request.min_confidence).then(|| DetectedLabel::new(name, confidence))
        })
        .take(request.max_labels.max(0) as usize)
        .collect()
}
