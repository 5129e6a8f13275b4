use axum::{extract::State, Json};
use tracing::info;

use portal_core::domain::{HealthAdviceInput, HealthAdviceOutput, ReportInput, ReportOutput};

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Health advice - POST /api/v1/flows/health-advice
pub async fn health_advice(
    State(state): State<AppState>,
    AppJson(payload): AppJson<HealthAdviceInput>,
) -> Result<Json<ApiResponse<HealthAdviceOutput>>, ApiError> {
    info!("Health advice request received");
    let output = state.flows.health_advice(&payload).await?;
    Ok(Json(ApiResponse::ok(output)))
}

/// Report generation - POST /api/v1/flows/health-report
pub async fn health_report(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ReportInput>,
) -> Result<Json<ApiResponse<ReportOutput>>, ApiError> {
    info!(report_type = ?payload.report_type, "Health report request received");
    let output = state.flows.generate_report(&payload).await?;
    Ok(Json(ApiResponse::ok(output)))
}
