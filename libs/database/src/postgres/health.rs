use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

/// Ping the database to verify the connection is live.
///
/// Used by readiness probes; a failed ping means the pool cannot reach
/// PostgreSQL right now.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    debug!("Running PostgreSQL health check");
    db.ping().await?;
    debug!("PostgreSQL health check passed");
    Ok(())
}
