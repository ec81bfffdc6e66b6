//! DTOs de concesionarios

use serde::{Deserialize, Serialize};

use crate::models::dealership::Dealership;
use crate::models::vehicle::{Coordinates, Vehicle};

/// Request de búsqueda del concesionario más cercano
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestDealershipRequest {
    pub current_location: Option<Coordinates>,
    #[serde(default)]
    pub vehicle_criteria: Option<serde_json::Value>,
    pub max_distance: Option<f64>,
}

/// Oferta de un vehículo disponible en el concesionario
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleOffer {
    pub vehicle: Vehicle,
    pub price: i64,
    pub available_count: u32,
    pub discount: f64,
    pub delivery_time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub website: String,
}

/// Response del concesionario más cercano con sus vehículos
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestDealershipResponse {
    pub dealership: Dealership,
    pub distance: f64,
    pub available_vehicles: Vec<VehicleOffer>,
    pub estimated_travel_time: String,
    pub contact_info: ContactInfo,
    pub rating: f64,
}

/// Estado de una búsqueda en background (fabricado, sin cola real)
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatus {
    pub search_id: String,
    pub status: String,
    pub results_count: u32,
    pub estimated_time_remaining: String,
}
