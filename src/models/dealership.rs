//! Modelo de Dealership
//!
//! Concesionarios de solo lectura: datos fixture cargados al arrancar.

use serde::{Deserialize, Serialize};

use crate::models::vehicle::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dealership {
    pub id: i64,
    pub name: String,
    pub location: Coordinates,
    pub address: String,
    pub working_hours: String,
    pub phone: String,
    pub rating: f64,
}

impl Dealership {
    /// Distancia euclidiana hasta un punto dado
    pub fn distance_to(&self, point: &Coordinates) -> f64 {
        ((self.location.x - point.x).powi(2) + (self.location.y - point.y).powi(2)).sqrt()
    }
}
