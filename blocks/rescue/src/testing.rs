// In-memory collaborators for pipeline tests.
//
// Each fake records what it was asked to do and can be told to fail.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use nivaran_atoms::cases::{BaseCaseStore, Case, CaseStatus};
use nivaran_atoms::labels::{BaseLabelClassifier, DetectedLabel, DetectionRequest};
use nivaran_atoms::media::BaseObjectStore;
use nivaran_atoms::ngos::{BaseNgoStore, Ngo};
use nivaran_atoms::{RescueError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

// =============================================================================
// Fixtures
// =============================================================================

/// Smallest byte string that sniffs as a JPEG.
pub fn jpeg_bytes() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00]
}

pub fn report_body(image: &[u8], latitude: Option<f64>, longitude: Option<f64>) -> String {
    serde_json::json!({
        "image_base64": STANDARD.encode(image),
        "latitude": latitude,
        "longitude": longitude,
    })
    .to_string()
}

pub fn ngo(ngo_id: &str, latitude: f64, longitude: f64, service_radius_km: f64) -> Ngo {
    Ngo {
        ngo_id: ngo_id.to_string(),
        latitude,
        longitude,
        service_radius_km,
    }
}

pub fn case_at(case_id: &str, latitude: Option<f64>, longitude: Option<f64>) -> Case {
    Case {
        case_id: case_id.to_string(),
        image_ref: format!("{}.jpg", case_id),
        labels: vec!["Dog".to_string()],
        status: CaseStatus::PendingReview,
        message: CaseStatus::PendingReview.message().to_string(),
        latitude,
        longitude,
        created_at: "2026-10-18T08:00:00+00:00".to_string(),
    }
}

// =============================================================================
// Object store
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PutCall {
    pub key: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Default)]
pub struct MockObjectStore {
    puts: Mutex<Vec<PutCall>>,
    failure: Option<String>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn puts(&self) -> Vec<PutCall> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseObjectStore for MockObjectStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        if let Some(message) = &self.failure {
            return Err(RescueError::collaborator(message.clone()));
        }
        self.puts.lock().unwrap().push(PutCall {
            key: key.to_string(),
            bytes,
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

// =============================================================================
// Classifier
// =============================================================================

#[derive(Default)]
pub struct MockClassifier {
    labels: Vec<DetectedLabel>,
    calls: Mutex<Vec<(String, DetectionRequest)>>,
    failure: Option<String>,
}

impl MockClassifier {
    /// Always answers with these names at 95% confidence.
    pub fn returning(names: &[&str]) -> Self {
        Self {
            labels: names.iter().map(|n| DetectedLabel::new(*n, 95.0)).collect(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, DetectionRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseLabelClassifier for MockClassifier {
    async fn detect_labels(
        &self,
        object_key: &str,
        request: DetectionRequest,
    ) -> Result<Vec<DetectedLabel>> {
        self.calls.lock().unwrap().push((object_key.to_string(), request));
        match &self.failure {
            Some(message) => Err(RescueError::collaborator(message.clone())),
            None => Ok(self.labels.clone()),
        }
    }
}

// =============================================================================
// Case store
// =============================================================================

#[derive(Default)]
pub struct InMemoryCaseStore {
    cases: Mutex<Vec<Case>>,
    put_failure: Option<String>,
    scan_failure: Option<String>,
}

impl InMemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cases(cases: Vec<Case>) -> Self {
        Self {
            cases: Mutex::new(cases),
            ..Self::default()
        }
    }

    pub fn failing_puts(message: &str) -> Self {
        Self {
            put_failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_scans(message: &str) -> Self {
        Self {
            scan_failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn cases(&self) -> Vec<Case> {
        self.cases.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseCaseStore for InMemoryCaseStore {
    async fn put_case(&self, case: &Case) -> Result<()> {
        if let Some(message) = &self.put_failure {
            return Err(RescueError::collaborator(message.clone()));
        }
        let mut cases = self.cases.lock().unwrap();
        if cases.iter().any(|c| c.case_id == case.case_id) {
            return Err(RescueError::collaborator("case already exists"));
        }
        cases.push(case.clone());
        Ok(())
    }

    async fn scan_cases(&self) -> Result<Vec<Case>> {
        match &self.scan_failure {
            Some(message) => Err(RescueError::collaborator(message.clone())),
            None => Ok(self.cases()),
        }
    }
}

// =============================================================================
// NGO store
// =============================================================================

#[derive(Default)]
pub struct InMemoryNgoStore {
    ngos: HashMap<String, Ngo>,
    failure: Option<String>,
}

impl InMemoryNgoStore {
    pub fn with_ngos(ngos: Vec<Ngo>) -> Self {
        Self {
            ngos: ngos.into_iter().map(|n| (n.ngo_id.clone(), n)).collect(),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl BaseNgoStore for InMemoryNgoStore {
    async fn get_ngo(&self, ngo_id: &str) -> Result<Option<Ngo>> {
        match &self.failure {
            Some(message) => Err(RescueError::collaborator(message.clone())),
            None => Ok(self.ngos.get(ngo_id).cloned()),
        }
    }
}
