use lambda_http::{http::StatusCode, Body, Error, Response};
use nivaran_atoms::RescueError;
use serde::Serialize;

use crate::decode::decode_report;
use crate::intake::IntakePipeline;
use crate::matching::NearbyCasesQuery;

/// HTTP Handler: POST /cases
pub async fn report_case_handler(
    pipeline: &IntakePipeline,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    tracing::info!("📥 report_case_handler: body_bytes={}", body.len());

    let report = match decode_report(body) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!("⚠️ Rejected intake request: {}", e);
            return error_response(&e);
        }
    };

    match pipeline.report_case(report).await {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(e) => error_response(&e),
    }
}

/// HTTP Handler: GET /cases/nearby?ngo_id={id}
pub async fn nearby_cases_handler(
    query: &NearbyCasesQuery,
    ngo_id: Option<&str>,
) -> Result<Response<Body>, Error> {
    let Some(ngo_id) = ngo_id else {
        return error_response(&RescueError::validation("ngo_id required as query param"));
    };

    match query.find_nearby_cases(ngo_id).await {
        Ok(cases) => json_response(StatusCode::OK, &cases),
        Err(e) => {
            if !e.is_client_fault() {
                tracing::error!("❌ nearby_cases_handler failed: ngo_id={}, error={}", ngo_id, e);
            }
            error_response(&e)
        }
    }
}

/// 400 for validation, 404 for unknown records, 500 for collaborator failures.
pub fn status_for(error: &RescueError) -> StatusCode {
    match error {
        RescueError::Validation(_) => StatusCode::BAD_REQUEST,
        RescueError::NotFound(_) => StatusCode::NOT_FOUND,
        RescueError::Collaborator(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(error: &RescueError) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status_for(error))
        .header("Content-Type", "application/json")
        .body(serde_json::json!({ "error": error.to_string() }).to_string().into())
        .map_err(Box::new)?)
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())
        .map_err(Box::new)?)
}
