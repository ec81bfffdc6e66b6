//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través del
//! router de Axum: el repositorio de vehículos detrás de un RwLock
//! (las mutaciones se serializan, las lecturas pueden concurrir) y
//! los datos fixture de solo lectura.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::dealership::Dealership;
use crate::models::maintenance::MaintenanceRecord;
use crate::repositories::{fixture_data, vehicle_repository::VehicleRepository};

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<RwLock<VehicleRepository>>,
    pub config: EnvironmentConfig,
    pub dealerships: Arc<Vec<Dealership>>,
    pub maintenance_records: Arc<HashMap<i64, Vec<MaintenanceRecord>>>,
}

impl AppState {
    /// Estado de producción: inventario sembrado con los fixtures
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_repository(config, VehicleRepository::with_fixtures())
    }

    /// Estado con un repositorio arbitrario (tests)
    pub fn with_repository(config: EnvironmentConfig, repository: VehicleRepository) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
            config,
            dealerships: Arc::new(fixture_data::dealerships()),
            maintenance_records: Arc::new(fixture_data::maintenance_records()),
        }
    }
}
