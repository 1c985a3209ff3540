use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use configs::DatabaseConfig;

/// Idle/lifetime limit for the embedded pool. Its single connection owns the
/// in-memory database, so it must outlive the process in practice.
const EMBEDDED_KEEPALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Open a connection pool described by `cfg`.
///
/// The embedded database is capped at one connection: every statement from
/// every service queues on it.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.connection_url());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.embedded {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(EMBEDDED_KEEPALIVE)
            .max_lifetime(EMBEDDED_KEEPALIVE);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    let db = Database::connect(opt).await?;
    info!(url = %cfg.display_url(), embedded = cfg.embedded, "database connected");
    Ok(db)
}

/// Fresh, empty embedded database.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    connect_with_config(&DatabaseConfig::in_memory()).await
}

/// Create any missing tables. Safe to call on every start.
pub async fn init_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!("database schema ready");
    Ok(())
}
