//! Rutas de concesionarios

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::dealership_controller::DealershipController;
use crate::dto::dealership_dto::{
    NearestDealershipRequest, NearestDealershipResponse, SearchStatus,
};
use crate::models::dealership::Dealership;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dealership_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_dealerships))
        .route("/nearest/with-vehicle", post(nearest_with_vehicle))
        .route("/search/async", post(search_async))
        .route("/search/status/:search_id", get(search_status))
}

fn controller(state: &AppState) -> DealershipController {
    DealershipController::new(state.repository.clone(), state.dealerships.clone())
}

async fn list_dealerships(State(state): State<AppState>) -> Json<Vec<Dealership>> {
    Json(controller(&state).list())
}

async fn nearest_with_vehicle(
    State(state): State<AppState>,
    Json(request): Json<NearestDealershipRequest>,
) -> Result<Json<NearestDealershipResponse>, AppError> {
    let response = controller(&state).nearest_with_vehicles(request).await?;
    Ok(Json(response))
}

async fn search_async(
    State(state): State<AppState>,
    request: Option<Json<NearestDealershipRequest>>,
) -> (StatusCode, Json<SearchStatus>) {
    let _ = request;
    (StatusCode::ACCEPTED, Json(controller(&state).start_search()))
}

async fn search_status(
    State(state): State<AppState>,
    Path(search_id): Path<String>,
) -> Json<SearchStatus> {
    Json(controller(&state).poll_search(&search_id))
}
