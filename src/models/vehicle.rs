//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus tipos asociados.
//! El inventario vive solo en memoria durante la vida del proceso.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Tipo de combustible del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Kerosene,
    Electricity,
    Diesel,
    Alcohol,
    Nuclear,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Kerosene => "KEROSENE",
            FuelType::Electricity => "ELECTRICITY",
            FuelType::Diesel => "DIESEL",
            FuelType::Alcohol => "ALCOHOL",
            FuelType::Nuclear => "NUCLEAR",
        }
    }

    /// Parsea el valor recibido como query param
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "KEROSENE" => Ok(FuelType::Kerosene),
            "ELECTRICITY" => Ok(FuelType::Electricity),
            "DIESEL" => Ok(FuelType::Diesel),
            "ALCOHOL" => Ok(FuelType::Alcohol),
            "NUCLEAR" => Ok(FuelType::Nuclear),
            other => Err(AppError::BadRequest(format!(
                "Invalid fuel type: '{}'",
                other
            ))),
        }
    }
}

/// Coordenadas del vehículo en el plano
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Vehicle principal del inventario
///
/// `engine_power` y `number_of_wheels` son opcionales: la ausencia significa
/// "desconocido", nunca cero ni un valor centinela.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub coordinates: Coordinates,
    pub creation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_wheels: Option<i64>,
    pub capacity: f64,
    pub fuel_type: FuelType,
}
