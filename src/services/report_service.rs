//! Servicio de reportes de mantenimiento
//!
//! Genera el reporte sobre los registros fixture en JSON, CSV o HTML.
//! La generación "asíncrona" no tiene cola de trabajos: devuelve un
//! estado fabricado, fiel al comportamiento del servidor original.

use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::dto::report_dto::{
    MaintenanceReport, ReportPeriod, ReportStatistics, ReportStatus,
};
use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::Vehicle;

pub fn build_report(
    vehicle: &Vehicle,
    records: &[MaintenanceRecord],
    include_costs: bool,
    include_details: bool,
) -> MaintenanceReport {
    let now = Utc::now();
    let total_cost: f64 = records.iter().map(|r| r.cost).sum();
    let total_downtime: f64 = records.iter().map(|r| r.duration_hours).sum();

    MaintenanceReport {
        vehicle_id: vehicle.id,
        vehicle_info: vehicle.clone(),
        report_period: ReportPeriod {
            start_date: now - Duration::days(365),
            end_date: now,
        },
        total_maintenance_count: records.len(),
        total_cost: include_costs.then_some(total_cost),
        maintenance_records: include_details.then(|| records.to_vec()),
        statistics: ReportStatistics {
            average_cost_per_maintenance: if records.is_empty() {
                0.0
            } else {
                total_cost / records.len() as f64
            },
            total_downtime_hours: total_downtime,
        },
        generated_at: now,
    }
}

pub fn render_csv(vehicle: &Vehicle, records: &[MaintenanceRecord]) -> String {
    let total_cost: f64 = records.iter().map(|r| r.cost).sum();
    format!(
        "Vehicle ID,Vehicle Name,Total Maintenance Count,Total Cost\n{},{},{},{}",
        vehicle.id,
        vehicle.name,
        records.len(),
        total_cost
    )
}

pub fn render_html(vehicle: &Vehicle, records: &[MaintenanceRecord]) -> String {
    let total_cost: f64 = records.iter().map(|r| r.cost).sum();
    format!(
        "<html>\n  <head><title>Maintenance Report for {name}</title></head>\n  <body>\n    <h1>Maintenance Report</h1>\n    <h2>{name}</h2>\n    <p>Total Maintenance Records: {count}</p>\n    <p>Total Cost: ${cost}</p>\n    <p>Generated: {generated}</p>\n  </body>\n</html>",
        name = vehicle.name,
        count = records.len(),
        cost = total_cost,
        generated = Utc::now().to_rfc3339(),
    )
}

/// Estado inicial de un reporte "en generación"
pub fn start_generation(vehicle_id: i64, base_url: &str) -> ReportStatus {
    let report_id = format!("report_{}_{}", vehicle_id, Uuid::new_v4());
    ReportStatus {
        download_url: format!("{}/api/reports/download/{}", base_url, report_id),
        report_id,
        status: "PROCESSING".to_string(),
        estimated_completion_time: Utc::now() + Duration::seconds(30),
        progress: 0,
    }
}

/// Estado fabricado de un reporte previamente "encolado"
pub fn poll_status(report_id: &str, base_url: &str) -> ReportStatus {
    let completed = rand::thread_rng().gen::<f64>() > 0.3;
    ReportStatus {
        report_id: report_id.to_string(),
        status: if completed { "COMPLETED" } else { "PROCESSING" }.to_string(),
        estimated_completion_time: Utc::now() + Duration::seconds(15),
        progress: if completed { 100 } else { 75 },
        download_url: format!("{}/api/reports/download/{}", base_url, report_id),
    }
}
