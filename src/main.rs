use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database::DatabaseConnection;
use fleet_maintenance::routes::create_router;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 Sistema de Mantenimiento de Flota");
    info!("====================================");

    // Inicializar base de datos (aplica migraciones pendientes)
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app_state = AppState::new(pool, config);
    let app = create_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🔩 Endpoints - Repuestos:");
    info!("   POST /api/repuesto - Crear repuesto");
    info!("   GET  /api/repuesto - Listar inventario");
    info!("   GET  /api/repuesto/bajo-stock - Repuestos bajo mínimo");
    info!("   GET  /api/repuesto/:id - Obtener repuesto");
    info!("   PUT  /api/repuesto/:id - Actualizar repuesto");
    info!("   DELETE /api/repuesto/:id - Eliminar repuesto");
    info!("📋 Endpoints - Órdenes de trabajo:");
    info!("   POST /api/orden - Crear orden (mantenimiento o falla)");
    info!("   GET  /api/orden - Listar con filtros");
    info!("   GET  /api/orden/:id - Obtener orden");
    info!("   GET  /api/orden/:id/historial - Historial de estados");
    info!("   POST /api/orden/:id/repuestos - Consumir repuesto");
    info!("   DELETE /api/orden/:id/repuestos/:repuesto_id - Devolver repuesto");
    info!("   PUT  /api/orden/:id/estado - Cambiar estado");
    info!("🚜 Endpoints - Equipos:");
    info!("   POST /api/equipo - Registrar equipo");
    info!("   GET  /api/equipo - Listar equipos");
    info!("   GET  /api/equipo/:id - Obtener equipo");
    info!("   PUT  /api/equipo/:id - Actualizar equipo");
    info!("   DELETE /api/equipo/:id - Eliminar equipo y sus órdenes");
    info!("🔧 Endpoints - Arregladas:");
    info!("   GET  /api/arreglada - Archivo de reparaciones");
    info!("   GET  /api/arreglada/:id - Detalle de reparación");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

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
