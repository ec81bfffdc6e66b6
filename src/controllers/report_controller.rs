//! Controller de reportes de mantenimiento

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tokio::sync::RwLock;

use crate::dto::report_dto::{MaintenanceReport, ReportQueryParams, ReportStatus};
use crate::models::maintenance::MaintenanceRecord;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::report_service;
use crate::utils::errors::{not_found_error, AppResult};

/// Reporte ya renderizado en el formato pedido
pub enum ReportOutput {
    Json(MaintenanceReport),
    Pdf(serde_json::Value),
    Csv { filename: String, body: String },
    Html(String),
}

impl IntoResponse for ReportOutput {
    fn into_response(self) -> Response {
        match self {
            ReportOutput::Json(report) => Json(report).into_response(),
            ReportOutput::Pdf(value) => Json(value).into_response(),
            ReportOutput::Csv { filename, body } => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename={}", filename),
                    ),
                ],
                body,
            )
                .into_response(),
            ReportOutput::Html(body) => {
                (StatusCode::OK, [(header::CONTENT_TYPE, "text/html")], body).into_response()
            }
        }
    }
}

pub struct ReportController {
    repository: Arc<RwLock<VehicleRepository>>,
    maintenance_records: Arc<HashMap<i64, Vec<MaintenanceRecord>>>,
    public_url: String,
}

impl ReportController {
    pub fn new(
        repository: Arc<RwLock<VehicleRepository>>,
        maintenance_records: Arc<HashMap<i64, Vec<MaintenanceRecord>>>,
        public_url: String,
    ) -> Self {
        Self {
            repository,
            maintenance_records,
            public_url,
        }
    }

    pub async fn maintenance_report(
        &self,
        vehicle_id: i64,
        params: ReportQueryParams,
    ) -> AppResult<ReportOutput> {
        let repository = self.repository.read().await;
        let vehicle = repository
            .find_by_id(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;

        let empty = Vec::new();
        let records = self.maintenance_records.get(&vehicle_id).unwrap_or(&empty);

        let include_costs = params.include_costs.as_deref().unwrap_or("true") == "true";
        let include_details = params.include_details.as_deref().unwrap_or("true") == "true";

        let output = match params.format.as_deref().unwrap_or("json") {
            "csv" => ReportOutput::Csv {
                filename: format!("maintenance-report-{}.csv", vehicle_id),
                body: report_service::render_csv(vehicle, records),
            },
            "html" => ReportOutput::Html(report_service::render_html(vehicle, records)),
            "pdf" => {
                let report =
                    report_service::build_report(vehicle, records, include_costs, include_details);
                let mut value = serde_json::to_value(&report)
                    .unwrap_or_else(|_| json!({ "vehicleId": vehicle_id }));
                if let Some(object) = value.as_object_mut() {
                    object.insert("format".to_string(), json!("pdf"));
                    object.insert(
                        "downloadUrl".to_string(),
                        json!(format!(
                            "{}/api/reports/maintenance/{}/download.pdf",
                            self.public_url, vehicle_id
                        )),
                    );
                }
                ReportOutput::Pdf(value)
            }
            _ => ReportOutput::Json(report_service::build_report(
                vehicle,
                records,
                include_costs,
                include_details,
            )),
        };

        Ok(output)
    }

    /// "Encola" la generación: no hay cola real, el estado es fabricado
    pub async fn start_generation(&self, vehicle_id: i64) -> AppResult<ReportStatus> {
        let repository = self.repository.read().await;
        if repository.find_by_id(vehicle_id).is_none() {
            return Err(not_found_error("Vehicle", vehicle_id));
        }
        Ok(report_service::start_generation(vehicle_id, &self.public_url))
    }

    pub async fn poll_status(&self, report_id: &str) -> ReportStatus {
        report_service::poll_status(report_id, &self.public_url)
    }
}
