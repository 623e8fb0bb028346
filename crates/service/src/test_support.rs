use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Connect to the test database and bring the schema up to date.
pub async fn get_db() -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
