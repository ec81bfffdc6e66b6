//! Controller de vehículos
//!
//! Orquesta la validación del boundary, el repositorio y el motor de
//! consultas. Los handlers de rutas lo construyen por request a
//! partir del estado compartido.

use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::vehicle_dto::{
    AverageEnginePowerResponse, CountByWheelsResponse, CreateVehicleRequest,
    PagedVehicleResponse, UpdateVehicleRequest, VehicleQueryParams,
};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::{NewVehicle, VehicleChanges, VehicleRepository};
use crate::services::query_engine::{self, VehicleQuery};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct VehicleController {
    repository: Arc<RwLock<VehicleRepository>>,
}

impl VehicleController {
    pub fn new(repository: Arc<RwLock<VehicleRepository>>) -> Self {
        Self { repository }
    }

    /// Listado paginado con filtros y ordenación
    pub async fn list(&self, params: VehicleQueryParams) -> AppResult<PagedVehicleResponse> {
        let spec = VehicleQuery::from_params(&params)?;
        let repository = self.repository.read().await;
        Ok(query_engine::query(repository.list(), &spec))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Vehicle> {
        let repository = self.repository.read().await;
        repository
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        let input = NewVehicle {
            name: request
                .name
                .ok_or_else(|| missing_field("name"))?,
            coordinates: request
                .coordinates
                .ok_or_else(|| missing_field("coordinates"))?,
            engine_power: request.engine_power,
            number_of_wheels: request.number_of_wheels,
            capacity: request
                .capacity
                .ok_or_else(|| missing_field("capacity"))?,
            fuel_type: request
                .fuel_type
                .ok_or_else(|| missing_field("fuelType"))?,
        };

        let mut repository = self.repository.write().await;
        repository.create(input)
    }

    pub async fn update(&self, id: i64, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;

        let changes = VehicleChanges {
            name: request.name,
            coordinates: request.coordinates,
            engine_power: request.engine_power,
            number_of_wheels: request.number_of_wheels,
            capacity: request.capacity,
            fuel_type: request.fuel_type,
        };

        let mut repository = self.repository.write().await;
        repository.update(id, changes)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut repository = self.repository.write().await;
        repository.delete(id)
    }

    pub async fn average_engine_power(&self) -> AppResult<AverageEnginePowerResponse> {
        let repository = self.repository.read().await;
        let average = query_engine::average_engine_power(repository.list())?;
        Ok(AverageEnginePowerResponse {
            average_engine_power: average,
        })
    }

    pub async fn count_by_wheels(&self, wheels: i64) -> AppResult<CountByWheelsResponse> {
        let repository = self.repository.read().await;
        let count = query_engine::count_by_wheels(repository.list(), wheels)?;
        Ok(CountByWheelsResponse { count })
    }

    pub async fn search_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<Vehicle>> {
        let repository = self.repository.read().await;
        query_engine::search_by_name_prefix(repository.list(), prefix)
    }
}

fn missing_field(field: &str) -> AppError {
    AppError::ValidationError(format!("Missing required field: {}", field))
}
