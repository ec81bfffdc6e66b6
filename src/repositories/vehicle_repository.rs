//! Repositorio de vehículos en memoria
//!
//! Dueño de la secuencia autoritativa de vehículos, en orden de
//! inserción, durante la vida del proceso. No hay persistencia: el
//! estado se reinicia con cada arranque.

use chrono::Utc;

use crate::models::vehicle::{Coordinates, FuelType, Vehicle};
use crate::utils::errors::{not_found_error, AppError};

/// Datos ya validados en el boundary para crear un vehículo
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub coordinates: Coordinates,
    pub engine_power: Option<i64>,
    pub number_of_wheels: Option<i64>,
    pub capacity: f64,
    pub fuel_type: FuelType,
}

/// Cambios parciales sobre un vehículo existente
///
/// Los campos ausentes quedan intactos; `id` y `creation_date` no son
/// modificables por diseño del tipo.
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub engine_power: Option<i64>,
    pub number_of_wheels: Option<i64>,
    pub capacity: Option<f64>,
    pub fuel_type: Option<FuelType>,
}

pub struct VehicleRepository {
    vehicles: Vec<Vehicle>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self {
            vehicles: Vec::new(),
        }
    }

    /// Repositorio sembrado con los cinco vehículos fixture del original
    pub fn with_fixtures() -> Self {
        let now = Utc::now();
        let fixture = |id, name: &str, x, y, power, wheels, capacity, fuel| Vehicle {
            id,
            name: name.to_string(),
            coordinates: Coordinates { x, y },
            creation_date: now,
            engine_power: power,
            number_of_wheels: wheels,
            capacity,
            fuel_type: fuel,
        };

        Self {
            vehicles: vec![
                fixture(1, "Tesla Model S", 100.0, 200.0, Some(1020), Some(4), 5.0, FuelType::Electricity),
                fixture(2, "Ford F-150", 150.0, 250.0, Some(400), Some(4), 5.5, FuelType::Diesel),
                fixture(3, "Boeing 747", 500.0, 1000.0, Some(60000), Some(18), 416.0, FuelType::Kerosene),
                fixture(4, "Nuclear Submarine", 1000.0, -500.0, Some(50000), Some(0), 150.0, FuelType::Nuclear),
                fixture(5, "Ethanol Race Car", 300.0, 400.0, Some(800), Some(4), 2.0, FuelType::Alcohol),
            ],
        }
    }

    /// Crea un vehículo asignando id y fecha de creación
    ///
    /// El id es `max(ids existentes) + 1`, o 1 con el repositorio vacío.
    /// Los ids eliminados no se reutilizan mientras exista un id mayor.
    pub fn create(&mut self, input: NewVehicle) -> Result<Vehicle, AppError> {
        Self::check_fields(
            &input.name,
            input.engine_power,
            input.number_of_wheels,
            input.capacity,
        )?;

        let id = self
            .vehicles
            .iter()
            .map(|v| v.id)
            .max()
            .map_or(1, |max| max + 1);

        let vehicle = Vehicle {
            id,
            name: input.name,
            coordinates: input.coordinates,
            creation_date: Utc::now(),
            engine_power: input.engine_power,
            number_of_wheels: input.number_of_wheels,
            capacity: input.capacity,
            fuel_type: input.fuel_type,
        };

        self.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Merge superficial de los campos presentes en `changes`
    pub fn update(&mut self, id: i64, changes: VehicleChanges) -> Result<Vehicle, AppError> {
        // Validar antes de tocar el registro: una operación fallida no
        // debe dejar el repositorio a medio modificar.
        if let Some(name) = &changes.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "name must not be empty".to_string(),
                ));
            }
        }
        if let Some(capacity) = changes.capacity {
            if capacity <= 0.0 {
                return Err(AppError::ValidationError(
                    "capacity must be positive".to_string(),
                ));
            }
        }
        if matches!(changes.engine_power, Some(p) if p < 1) {
            return Err(AppError::ValidationError(
                "enginePower must be positive".to_string(),
            ));
        }
        if matches!(changes.number_of_wheels, Some(w) if w < 0) {
            return Err(AppError::ValidationError(
                "numberOfWheels must be non-negative".to_string(),
            ));
        }

        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        if let Some(name) = changes.name {
            vehicle.name = name;
        }
        if let Some(coordinates) = changes.coordinates {
            vehicle.coordinates = coordinates;
        }
        if let Some(engine_power) = changes.engine_power {
            vehicle.engine_power = Some(engine_power);
        }
        if let Some(number_of_wheels) = changes.number_of_wheels {
            vehicle.number_of_wheels = Some(number_of_wheels);
        }
        if let Some(capacity) = changes.capacity {
            vehicle.capacity = capacity;
        }
        if let Some(fuel_type) = changes.fuel_type {
            vehicle.fuel_type = fuel_type;
        }

        Ok(vehicle.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), AppError> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;
        self.vehicles.remove(index);
        Ok(())
    }

    /// Snapshot completo en orden de inserción
    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn check_fields(
        name: &str,
        engine_power: Option<i64>,
        number_of_wheels: Option<i64>,
        capacity: f64,
    ) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if capacity <= 0.0 {
            return Err(AppError::ValidationError(
                "capacity must be positive".to_string(),
            ));
        }
        if matches!(engine_power, Some(p) if p < 1) {
            return Err(AppError::ValidationError(
                "enginePower must be positive".to_string(),
            ));
        }
        if matches!(number_of_wheels, Some(w) if w < 0) {
            return Err(AppError::ValidationError(
                "numberOfWheels must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for VehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_input(name: &str) -> NewVehicle {
        NewVehicle {
            name: name.to_string(),
            coordinates: Coordinates { x: 1.0, y: 2.0 },
            engine_power: Some(100),
            number_of_wheels: Some(4),
            capacity: 5.0,
            fuel_type: FuelType::Diesel,
        }
    }

    #[test]
    fn create_assigns_incrementing_ids_starting_at_one() {
        let mut repo = VehicleRepository::new();
        let first = repo.create(new_input("A")).unwrap();
        let second = repo.create(new_input("B")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_does_not_reuse_deleted_ids_below_max() {
        let mut repo = VehicleRepository::with_fixtures();
        repo.delete(3).unwrap();
        let created = repo.create(new_input("New")).unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn create_rejects_invalid_fields_without_mutating() {
        let mut repo = VehicleRepository::new();
        let mut input = new_input("A");
        input.capacity = 0.0;
        let err = repo.create(input).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut repo = VehicleRepository::with_fixtures();
        let before = repo.find_by_id(2).unwrap().clone();

        let updated = repo
            .update(
                2,
                VehicleChanges {
                    name: Some("Ford F-150 Raptor".to_string()),
                    engine_power: Some(450),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.creation_date, before.creation_date);
        assert_eq!(updated.name, "Ford F-150 Raptor");
        assert_eq!(updated.engine_power, Some(450));
        // Campos no suministrados quedan intactos
        assert_eq!(updated.coordinates, before.coordinates);
        assert_eq!(updated.capacity, before.capacity);
        assert_eq!(updated.fuel_type, before.fuel_type);
    }

    #[test]
    fn update_rejects_invalid_change_and_leaves_record_untouched() {
        let mut repo = VehicleRepository::with_fixtures();
        let before = repo.find_by_id(1).unwrap().clone();

        let err = repo
            .update(
                1,
                VehicleChanges {
                    name: Some("Renamed".to_string()),
                    capacity: Some(-1.0),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(repo.find_by_id(1).unwrap(), &before);
    }

    #[test]
    fn delete_then_lookup_is_none() {
        let mut repo = VehicleRepository::with_fixtures();
        repo.delete(4).unwrap();
        assert!(repo.find_by_id(4).is_none());
        assert!(matches!(repo.delete(4), Err(AppError::NotFound(_))));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut repo = VehicleRepository::new();
        for name in ["C", "A", "B"] {
            repo.create(new_input(name)).unwrap();
        }
        let names: Vec<&str> = repo.list().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
