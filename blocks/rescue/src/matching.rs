use nivaran_atoms::cases::{BaseCaseStore, Case};
use nivaran_atoms::ngos::{BaseNgoStore, Ngo};
use nivaran_atoms::{RescueError, Result};
use std::sync::Arc;

/// Open cases inside an NGO's service disk.
///
/// Full scan of the case table with an exact distance check on every row.
/// Any future index in front of this must not drop a true match.
#[derive(Clone)]
pub struct NearbyCasesQuery {
    ngos: Arc<dyn BaseNgoStore>,
    cases: Arc<dyn BaseCaseStore>,
}

impl NearbyCasesQuery {
    pub fn new(ngos: Arc<dyn BaseNgoStore>, cases: Arc<dyn BaseCaseStore>) -> Self {
        Self { ngos, cases }
    }

    pub async fn find_nearby_cases(&self, ngo_id: &str) -> Result<Vec<Case>> {
        // Blank ids are rejected, but a non-blank id is looked up exactly as sent
        if ngo_id.trim().is_empty() {
            return Err(RescueError::validation("ngo_id required as query param"));
        }

        let ngo = self
            .ngos
            .get_ngo(ngo_id)
            .await?
            .ok_or_else(|| RescueError::not_found("NGO not found"))?;

        let scanned = self.cases.scan_cases().await?;
        let scanned_count = scanned.len();
        let nearby = cases_within(&ngo, scanned);

        tracing::info!(
            "📍 find_nearby_cases: ngo_id={}, radius_km={}, scanned={}, matched={}",
            ngo.ngo_id,
            ngo.service_radius_km,
            scanned_count,
            nearby.len(),
        );

        Ok(nearby)
    }
}

/// Keep, in scan order, the cases the NGO covers. Cases without both
/// coordinates are dropped.
pub fn cases_within(ngo: &Ngo, cases: Vec<Case>) -> Vec<Case> {
    cases.into_iter().filter(|case| ngo.covers_case(case)).collect()
}
