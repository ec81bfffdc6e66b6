//! Controller del shop
//!
//! Búsqueda por rango de potencia y la operación add-wheels.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::{VehicleChanges, VehicleRepository};
use crate::services::query_engine;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct ShopController {
    repository: Arc<RwLock<VehicleRepository>>,
}

impl ShopController {
    pub fn new(repository: Arc<RwLock<VehicleRepository>>) -> Self {
        Self { repository }
    }

    pub async fn search_by_engine_power(&self, from: i64, to: i64) -> AppResult<Vec<Vehicle>> {
        let repository = self.repository.read().await;
        query_engine::search_by_engine_power(repository.list(), from, to)
    }

    /// Suma ruedas al vehículo; la ausencia previa cuenta como cero
    pub async fn add_wheels(&self, vehicle_id: i64, wheels: i64) -> AppResult<Vehicle> {
        if wheels < 1 {
            return Err(AppError::BadRequest(
                "Number of wheels must be positive".to_string(),
            ));
        }

        let mut repository = self.repository.write().await;
        let current = repository
            .find_by_id(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?
            .number_of_wheels
            .unwrap_or(0);

        let total = current.checked_add(wheels).ok_or_else(|| {
            AppError::BadRequest("Resulting number of wheels is too large".to_string())
        })?;

        repository.update(
            vehicle_id,
            VehicleChanges {
                number_of_wheels: Some(total),
                ..Default::default()
            },
        )
    }
}
