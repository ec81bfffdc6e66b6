//! Rutas del shop

use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};

use crate::controllers::shop_controller::ShopController;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_shop_router() -> Router<AppState> {
    Router::new()
        .route("/search/by-engine-power/:from/:to", get(search_by_engine_power))
        .route("/add-wheels/:vehicle_id/:number_of_wheels", patch(add_wheels))
}

async fn search_by_engine_power(
    State(state): State<AppState>,
    Path((from, to)): Path<(i64, i64)>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = ShopController::new(state.repository.clone());
    let results = controller.search_by_engine_power(from, to).await?;
    Ok(Json(results))
}

async fn add_wheels(
    State(state): State<AppState>,
    Path((vehicle_id, number_of_wheels)): Path<(i64, i64)>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = ShopController::new(state.repository.clone());
    let vehicle = controller.add_wheels(vehicle_id, number_of_wheels).await?;
    Ok(Json(vehicle))
}
