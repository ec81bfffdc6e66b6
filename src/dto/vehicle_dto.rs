//! DTOs de vehículos
//!
//! Requests y responses de la API de vehículos. Los nombres de campo
//! siguen el contrato camelCase del cliente.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Coordinates, FuelType, Vehicle};

/// Request para crear un vehículo
///
/// Los campos requeridos llegan como `Option` para poder señalar la
/// ausencia como error de validación en lugar de un fallo de parseo.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,

    #[validate(range(min = 1, message = "enginePower must be positive"))]
    pub engine_power: Option<i64>,

    #[validate(range(min = 0, message = "numberOfWheels must be non-negative"))]
    pub number_of_wheels: Option<i64>,

    pub capacity: Option<f64>,
    pub fuel_type: Option<FuelType>,
}

/// Request para actualizar parcialmente un vehículo
///
/// Solo cambian los campos presentes; `id` y `creationDate` no se
/// pueden modificar (no existen en este request).
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,

    #[validate(range(min = 1, message = "enginePower must be positive"))]
    pub engine_power: Option<i64>,

    #[validate(range(min = 0, message = "numberOfWheels must be non-negative"))]
    pub number_of_wheels: Option<i64>,

    pub capacity: Option<f64>,
    pub fuel_type: Option<FuelType>,
}

/// Query params del listado de vehículos
///
/// Los campos numéricos llegan como strings para poder responder
/// BadRequest con el mensaje de parseo en lugar de un 400 opaco.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQueryParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub name: Option<String>,
    pub fuel_type: Option<String>,
    pub min_engine_power: Option<String>,
    pub max_engine_power: Option<String>,
    pub min_wheels: Option<String>,
    pub max_wheels: Option<String>,
    pub min_capacity: Option<String>,
    pub max_capacity: Option<String>,
}

/// Página de vehículos
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedVehicleResponse {
    pub content: Vec<Vehicle>,
    pub total_elements: usize,
    pub total_pages: i64,
    pub current_page: i64,
}

/// Response de potencia media de motor
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageEnginePowerResponse {
    pub average_engine_power: f64,
}

/// Response de conteo por número de ruedas
#[derive(Debug, Serialize, Deserialize)]
pub struct CountByWheelsResponse {
    pub count: usize,
}
