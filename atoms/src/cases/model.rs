use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Where a case sits after intake.
///
/// Intake only ever produces `InvalidImage` or `PendingReview`. Statuses written
/// by a review workflow outside this system are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    InvalidImage,
    PendingReview,
    Other(String),
}

impl CaseStatus {
    /// The one transition intake makes, straight after classification.
    pub fn from_detection(is_animal_detected: bool) -> Self {
        if is_animal_detected {
            Self::PendingReview
        } else {
            Self::InvalidImage
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidImage => "invalid_image",
            Self::PendingReview => "pending_review",
            Self::Other(status) => status,
        }
    }

    /// Caller-facing explanation of the status. Empty for `Other`, whose
    /// records carry their own stored message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidImage => "No animal detected. Please upload a valid animal image.",
            Self::PendingReview => "Animal detected.",
            Self::Other(_) => "",
        }
    }
}

impl From<String> for CaseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "invalid_image" => Self::InvalidImage,
            "pending_review" => Self::PendingReview,
            _ => Self::Other(value),
        }
    }
}

impl From<CaseStatus> for String {
    fn from(value: CaseStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case domain model - one reported animal-welfare incident
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Case {
    pub case_id: String,

    /// Object store key of the photo; stored as "s3_key"
    #[serde(rename = "s3_key")]
    pub image_ref: String,

    pub labels: Vec<String>,
    pub status: CaseStatus,
    pub message: String,

    #[serde(serialize_with = "plain_number")]
    pub latitude: Option<f64>,
    #[serde(serialize_with = "plain_number")]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub created_at: String,
}

impl Case {
    /// Both coordinates, or nothing. A case without both never matches.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn to_result(&self) -> CaseResult {
        CaseResult {
            case_id: self.case_id.clone(),
            status: self.status.clone(),
            message: self.message.clone(),
            labels: self.labels.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// What intake hands back to the reporter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CaseResult {
    pub case_id: String,
    pub status: CaseStatus,
    pub message: String,
    pub labels: Vec<String>,
    #[serde(serialize_with = "plain_number")]
    pub latitude: Option<f64>,
    #[serde(serialize_with = "plain_number")]
    pub longitude: Option<f64>,
}

/// Whole-valued coordinates go out as integers (12, not 12.0).
fn plain_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => serializer.serialize_some(&(*v as i64)),
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}
