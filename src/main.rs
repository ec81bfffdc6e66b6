use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use vehicle_inventory::config::environment::EnvironmentConfig;
use vehicle_inventory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🚗 Vehicle Inventory - API de inventario en memoria");
    info!("===================================================");

    let addr: SocketAddr = config.server_addr().parse()?;

    // Estado con los fixtures del inventario
    let state = AppState::new(config);
    let app = vehicle_inventory::app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🚙 Vehicles:");
    info!("   GET    /api/vehicles - Listado paginado con filtros");
    info!("   POST   /api/vehicles - Crear vehículo");
    info!("   GET    /api/vehicles/:id - Obtener vehículo");
    info!("   PATCH  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("   GET    /api/vehicles/stats/average-engine-power");
    info!("   GET    /api/vehicles/stats/count-by-wheels/:wheels");
    info!("   GET    /api/vehicles/search/name-starts-with/:prefix");
    info!("🛒 Shop:");
    info!("   GET    /api/shop/search/by-engine-power/:from/:to");
    info!("   PATCH  /api/shop/add-wheels/:vehicleId/:numberOfWheels");
    info!("📄 Reports:");
    info!("   GET    /api/reports/maintenance/:vehicleId");
    info!("   POST   /api/reports/maintenance/:vehicleId/generate");
    info!("   GET    /api/reports/status/:reportId");
    info!("🏢 Dealerships:");
    info!("   GET    /api/dealerships");
    info!("   POST   /api/dealerships/nearest/with-vehicle");
    info!("   POST   /api/dealerships/search/async");
    info!("   GET    /api/dealerships/search/status/:searchId");
    info!("❤️  Health:");
    info!("   GET    /api/health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
