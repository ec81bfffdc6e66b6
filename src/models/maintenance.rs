//! Modelo de registros de mantenimiento
//!
//! Datos fixture de solo lectura, indexados por id de vehículo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub mileage: i64,
    pub description: String,
    pub parts_replaced: Vec<String>,
    pub technician: String,
    pub cost: f64,
    pub duration_hours: f64,
}
