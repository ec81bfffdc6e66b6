//! API de inventario de vehículos
//!
//! Backend mock en memoria: CRUD de vehículos con motor de consultas
//! (filtro + ordenación + paginación), estadísticas, shop, reportes de
//! mantenimiento y concesionarios fixture. Sin persistencia: el estado
//! se reinicia con el proceso.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Router};

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construye el router completo de la API sobre un estado dado
pub fn app(state: AppState) -> Router {
    // Sin CORS_ORIGINS el API queda abierto (modo desarrollo)
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/api/health", get(routes::health))
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/shop", routes::shop_routes::create_shop_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .nest(
            "/api/dealerships",
            routes::dealership_routes::create_dealership_router(),
        )
        .layer(cors)
        .with_state(state)
}
