//! Routers por recurso

pub mod dealership_routes;
pub mod report_routes;
pub mod shop_routes;
pub mod vehicle_routes;

use axum::Json;
use serde_json::json;

/// Health check del servicio
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "services": {
            "vehicles": "operational",
            "shop": "operational",
            "reports": "operational",
            "dealerships": "operational"
        }
    }))
}
