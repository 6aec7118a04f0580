use serde::{Deserialize, Serialize};

/// A single label returned by the classifier, already above its confidence floor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetectedLabel {
    pub name: String,
    pub confidence: f32, // percent, 0..=100
}

impl DetectedLabel {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// What the intake pipeline asks the classifier for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRequest {
    pub max_labels: i32,
    pub min_confidence: f32,
}

impl Default for DetectionRequest {
    fn default() -> Self {
        Self {
            max_labels: 10,
            min_confidence: 80.0,
        }
    }
}
