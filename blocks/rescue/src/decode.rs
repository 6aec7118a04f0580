use base64::{engine::general_purpose::STANDARD, Engine as _};
use nivaran_atoms::{RescueError, Result};

use crate::types::{ReportCase, ReportCasePayload};

/// Turn a raw intake body into a validated [`ReportCase`].
///
/// Rejects an empty or malformed body, undecodable base64, an empty payload,
/// bytes that are not a known image format, and non-finite coordinates.
/// Out-of-range coordinates are accepted as-is and only logged.
pub fn decode_report(body: &[u8]) -> Result<ReportCase> {
    if body.is_empty() {
        return Err(RescueError::validation("Request body is required"));
    }

    let payload: ReportCasePayload = serde_json::from_slice(body)
        .map_err(|e| RescueError::validation(format!("Invalid request body: {}", e)))?;

    let encoded: String = strip_data_url(payload.image_base64.trim())
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let image = STANDARD
        .decode(encoded)
        .map_err(|e| RescueError::validation(format!("image_base64 is not valid base64: {}", e)))?;

    if image.is_empty() {
        return Err(RescueError::validation("image_base64 is empty"));
    }

    let format = image::guess_format(&image).map_err(|_| {
        RescueError::validation("image_base64 does not contain a recognizable image")
    })?;

    let latitude = check_coordinate("latitude", payload.latitude, 90.0)?;
    let longitude = check_coordinate("longitude", payload.longitude, 180.0)?;

    tracing::debug!(
        "📦 Decoded report: {} bytes ({:?}), latitude={:?}, longitude={:?}",
        image.len(),
        format,
        latitude,
        longitude,
    );

    Ok(ReportCase {
        image,
        latitude,
        longitude,
    })
}

/// "data:image/png;base64,AAAA" -> "AAAA"; anything else is returned untouched.
fn strip_data_url(encoded: &str) -> &str {
    match encoded.strip_prefix("data:") {
        Some(rest) => rest.split_once(";base64,").map_or(encoded, |(_, data)| data),
        None => encoded,
    }
}

fn check_coordinate(name: &str, value: Option<f64>, bound: f64) -> Result<Option<f64>> {
    let Some(value) = value else {
        return Ok(None);
    };

    if !value.is_finite() {
        return Err(RescueError::validation(format!("{} must be a finite number", name)));
    }

    if value.abs() > bound {
        tracing::warn!("⚠️ Accepting out-of-range {}: {}", name, value);
    }

    Ok(Some(value))
}
