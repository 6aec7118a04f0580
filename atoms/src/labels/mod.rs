// Re-export model types, the acceptance policy and the classifier seam
pub mod classifier;
pub mod model;
pub mod policy;

pub use classifier::BaseLabelClassifier;
pub use model::{DetectedLabel, DetectionRequest};
pub use policy::{AnimalVocabulary, DEFAULT_ANIMAL_LABELS};
