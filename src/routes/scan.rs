//! Scan route: the full pipeline for one website.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::scan::{ScanRequest, ScanResult};
use crate::services::scanner;
use crate::AppState;

/// Handle POST /api/scan, running the whole scan pipeline for the
/// requested site.
pub async fn scan_website(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResult>, AppError> {
    let result = scanner::scan_site(&state, &request.url).await?;
    Ok(Json(result))
}
