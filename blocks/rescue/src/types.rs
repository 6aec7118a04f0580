use serde::Deserialize;

// ========== INTAKE REQUEST ==========

/// Raw intake body as the client sends it.
#[derive(Debug, Deserialize)]
pub struct ReportCasePayload {
    /// Plain base64, or a `data:image/...;base64,` URL straight from a FileReader
    pub image_base64: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A decoded, validated intake request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCase {
    pub image: Vec<u8>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
