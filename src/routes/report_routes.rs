//! Rutas de reportes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::report_controller::{ReportController, ReportOutput};
use crate::dto::report_dto::{GenerateReportRequest, ReportQueryParams, ReportStatus};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/maintenance/:vehicle_id", get(maintenance_report))
        .route("/maintenance/:vehicle_id/generate", post(generate_report))
        .route("/status/:report_id", get(report_status))
}

fn controller(state: &AppState) -> ReportController {
    ReportController::new(
        state.repository.clone(),
        state.maintenance_records.clone(),
        state.config.public_url.clone(),
    )
}

async fn maintenance_report(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
    Query(params): Query<ReportQueryParams>,
) -> Result<ReportOutput, AppError> {
    controller(&state).maintenance_report(vehicle_id, params).await
}

async fn generate_report(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
    request: Option<Json<GenerateReportRequest>>,
) -> Result<(StatusCode, Json<ReportStatus>), AppError> {
    // El formato pedido no cambia el estado fabricado
    let _ = request;
    let status = controller(&state).start_generation(vehicle_id).await?;
    Ok((StatusCode::ACCEPTED, Json(status)))
}

async fn report_status(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Json<ReportStatus> {
    Json(controller(&state).poll_status(&report_id).await)
}
