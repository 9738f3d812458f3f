//! SeaORM repositories backed by Postgres.
//!
//! Every mutation runs inside one transaction: the entity write and its
//! change log row land together or not at all. Early returns drop the
//! open transaction, which rolls it back.

mod audit;
mod categories;
mod products;
mod stock;

pub use audit::PgAuditRepository;
pub use categories::PgCategoryRepository;
pub use products::PgProductRepository;
pub use stock::PgStockRepository;

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseTransaction, DbErr};

use crate::entity::change_logs;
use crate::models::AuditRecord;

/// Append a change log row inside the caller's transaction.
///
/// `created_at` stays unset; the column default fills it on insert.
pub(crate) async fn insert_audit(
    txn: &DatabaseTransaction,
    record: AuditRecord,
) -> Result<(), DbErr> {
    change_logs::ActiveModel {
        entity: Set(record.entity),
        entity_id: Set(record.entity_id),
        action: Set(record.action),
        details: Set(record.details),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    Ok(())
}
