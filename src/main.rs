use axum::ServiceExt;
use axum::extract::Request;
use backend::config::AppConfig;
use backend::error::ServerError;
use backend::{routes, telemetry};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    telemetry::init();

    if let Err(err) = run().await {
        error!(error = %err, "backend stopped");
        return Err(err);
    }
    Ok(())
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!(
        %addr,
        version = %config.version,
        origins = ?config.allowed_origins,
        "backend listening"
    );
    info!("Endpoints: GET {}", routes::HEALTH_PATH);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("backend shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
