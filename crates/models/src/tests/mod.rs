

use sea_orm::DatabaseConnection;

/// Setup a fresh embedded database with the schema applied
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    crate::db::init_schema(&db).await?;
    Ok(db)
}
