use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::entity::change_logs;
use crate::error::InventoryResult;
use crate::models::{AuditFilter, ChangeLogEntry};
use crate::repository::AuditRepository;

pub struct PgAuditRepository {
    db: DatabaseConnection,
}

impl PgAuditRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditRepository for PgAuditRepository {
    async fn list(&self, filter: AuditFilter) -> InventoryResult<Vec<ChangeLogEntry>> {
        let mut query = change_logs::Entity::find();

        // Apply filters
        if let Some(entity) = filter.entity {
            query = query.filter(change_logs::Column::Entity.eq(entity));
        }
        if let Some(action) = filter.action {
            query = query.filter(change_logs::Column::Action.eq(action));
        }

        // Apply pagination and ordering
        query = query
            .order_by_desc(change_logs::Column::CreatedAt)
            .order_by_desc(change_logs::Column::Id)
            .limit(filter.limit as u64)
            .offset(filter.offset as u64);

        let models = query.all(&self.db).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
