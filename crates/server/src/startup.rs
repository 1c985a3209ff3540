use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the database, create the schema and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::init_schema(&db).await?;

    let state = ServerState::new(db);
    Ok(routes::build_router(state, build_cors()))
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting tenders server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Resolves once `signal` fires. A signal that cannot be installed never resolves.
async fn wait_for_signal<S>(signal: S)
where
    S: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!(error = %e, "failed to listen for Ctrl+C; serving until the process is killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}

/// Public entry: run the HTTP server with an already loaded configuration until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    serve(cfg, shutdown_signal()).await
}
