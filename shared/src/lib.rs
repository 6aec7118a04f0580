//! AWS wiring for the rescue Lambdas: configuration, SDK-backed collaborators,
//! and the per-container [`AppState`].

pub mod config;
pub mod dynamo;
pub mod rekognition;
pub mod s3;

pub use config::{Config, ConfigError};

use aws_config::{BehaviorVersion, SdkConfig};
use dynamo::{DynamoCaseStore, DynamoNgoStore};
use rekognition::RekognitionClassifier;
use rescue_block::{IntakePipeline, NearbyCasesQuery};
use s3::S3ObjectStore;
use std::sync::Arc;

/// Built once per Lambda container and shared by every invocation.
/// Holds no mutable state; each request reads the stores fresh.
pub struct AppState {
    pub config: Config,
    pub intake: IntakePipeline,
    pub nearby: NearbyCasesQuery,
}

impl AppState {
    pub fn new(sdk_config: &SdkConfig, config: Config) -> Self {
        let dynamo_client = aws_sdk_dynamodb::Client::new(sdk_config);
        let s3_client = aws_sdk_s3::Client::new(sdk_config);
        let rekognition_client = aws_sdk_rekognition::Client::new(sdk_config);

        let cases = Arc::new(DynamoCaseStore::new(dynamo_client.clone(), &config.cases_table));
        let ngos = Arc::new(DynamoNgoStore::new(dynamo_client, &config.ngos_table));
        let images = Arc::new(S3ObjectStore::new(s3_client, &config.images_bucket));
        let classifier = Arc::new(RekognitionClassifier::new(rekognition_client, &config.images_bucket));

        let intake = IntakePipeline::new(
            images,
            classifier,
            cases.clone(),
            config.animal_labels.clone(),
            config.detection,
        );
        let nearby = NearbyCasesQuery::new(ngos, cases);

        Self {
            config,
            intake,
            nearby,
        }
    }

    /// Read [`Config`] from the environment and AWS settings from the default chain.
    pub async fn from_env() -> Result<Self, ConfigError> {
        let config = Config::from_env()?;
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        tracing::info!(
            "Configuration loaded: bucket={}, cases_table={}, ngos_table={}, vocabulary_size={}, max_labels={}, min_confidence={}",
            config.images_bucket,
            config.cases_table,
            config.ngos_table,
            config.animal_labels.len(),
            config.detection.max_labels,
            config.detection.min_confidence,
        );

        Ok(Self::new(&sdk_config, config))
    }
}
