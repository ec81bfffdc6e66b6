//! DTOs de reportes de mantenimiento

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::Vehicle;

/// Query params del reporte de mantenimiento
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQueryParams {
    pub format: Option<String>,
    pub include_details: Option<String>,
    pub include_costs: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    pub average_cost_per_maintenance: f64,
    pub total_downtime_hours: f64,
}

/// Reporte de mantenimiento de un vehículo
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceReport {
    pub vehicle_id: i64,
    pub vehicle_info: Vehicle,
    pub report_period: ReportPeriod,
    pub total_maintenance_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_records: Option<Vec<MaintenanceRecord>>,
    pub statistics: ReportStatistics,
    pub generated_at: DateTime<Utc>,
}

/// Request de generación asíncrona de reporte
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReportRequest {
    pub format: Option<String>,
}

/// Estado de un reporte generado en background
///
/// No hay cola de trabajos real: el estado es fabricado, igual que en
/// el servidor original.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatus {
    pub report_id: String,
    pub status: String,
    pub estimated_completion_time: DateTime<Utc>,
    pub progress: u8,
    pub download_url: String,
}
