//! Rutas de vehículos

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    AverageEnginePowerResponse, CountByWheelsResponse, CreateVehicleRequest,
    PagedVehicleResponse, UpdateVehicleRequest, VehicleQueryParams,
};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).patch(update_vehicle).delete(delete_vehicle),
        )
        .route("/stats/average-engine-power", get(average_engine_power))
        .route("/stats/count-by-wheels/:wheels", get(count_by_wheels))
        .route("/search/name-starts-with/:prefix", get(search_by_name_prefix))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleQueryParams>,
) -> Result<Json<PagedVehicleResponse>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let vehicle = controller.get_by_id(id).await?;
    Ok(Json(vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let vehicle = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let vehicle = controller.update(id, request).await?;
    Ok(Json(vehicle))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn average_engine_power(
    State(state): State<AppState>,
) -> Result<Json<AverageEnginePowerResponse>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let response = controller.average_engine_power().await?;
    Ok(Json(response))
}

async fn count_by_wheels(
    State(state): State<AppState>,
    Path(wheels): Path<i64>,
) -> Result<Json<CountByWheelsResponse>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let response = controller.count_by_wheels(wheels).await?;
    Ok(Json(response))
}

async fn search_by_name_prefix(
    State(state): State<AppState>,
    Path(prefix): Path<String>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.repository.clone());
    let results = controller.search_by_name_prefix(&prefix).await?;
    Ok(Json(results))
}
