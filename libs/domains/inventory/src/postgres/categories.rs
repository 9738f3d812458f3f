use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr, TransactionTrait,
};

use super::insert_audit;
use crate::entity::{categories, products};
use crate::error::{InventoryError, InventoryResult};
use crate::models::{AuditEntity, AuditRecord, Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> InventoryResult<Vec<Category>> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Category>> {
        let model = categories::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateCategory) -> InventoryResult<Category> {
        let txn = self.db.begin().await?;

        let active_model: categories::ActiveModel = input.into();
        let model = active_model.insert(&txn).await?;

        insert_audit(
            &txn,
            AuditRecord::created(AuditEntity::Category, model.id, &model.name),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(category_id = model.id, "Created category");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateCategory) -> InventoryResult<Category> {
        let txn = self.db.begin().await?;

        let existing = categories::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(InventoryError::CategoryNotFound(id))?;

        let mut active_model: categories::ActiveModel = existing.into();
        active_model.name = Set(input.name);
        active_model.description = Set(input.description);
        let model = active_model.update(&txn).await?;

        insert_audit(
            &txn,
            AuditRecord::updated(AuditEntity::Category, id, &model.name),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(category_id = id, "Updated category");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> InventoryResult<()> {
        let txn = self.db.begin().await?;

        let existing = categories::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(InventoryError::CategoryNotFound(id))?;

        let product_count = products::Entity::find()
            .filter(products::Column::CategoryId.eq(id))
            .count(&txn)
            .await?;
        if product_count > 0 {
            return Err(InventoryError::CategoryInUse(id));
        }

        insert_audit(
            &txn,
            AuditRecord::deleted(AuditEntity::Category, id, &existing.name),
        )
        .await?;

        if let Err(err) = categories::Entity::delete_by_id(id).exec(&txn).await {
            // The FK is RESTRICT; a violation here means a product appeared
            // after the count and the delete must still be refused.
            if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                return Err(InventoryError::CategoryInUse(id));
            }
            return Err(err.into());
        }

        txn.commit().await?;

        tracing::info!(category_id = id, "Deleted category");
        Ok(())
    }
}
