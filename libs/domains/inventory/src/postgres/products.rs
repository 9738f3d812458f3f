use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder,
    TransactionTrait,
};

use super::insert_audit;
use crate::entity::{categories, products};
use crate::error::{InventoryError, InventoryResult};
use crate::models::{
    AuditEntity, AuditRecord, CreateProduct, Product, ProductWithCategory, UpdateProduct,
};
use crate::repository::ProductRepository;

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A product row may only point at a category that exists.
async fn ensure_category_exists<C: ConnectionTrait>(
    conn: &C,
    category_id: i32,
) -> InventoryResult<()> {
    categories::Entity::find_by_id(category_id)
        .one(conn)
        .await?
        .map(|_| ())
        .ok_or(InventoryError::CategoryRequired)
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> InventoryResult<Vec<ProductWithCategory>> {
        let rows = products::Entity::find()
            .find_also_related(categories::Entity)
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, category)| ProductWithCategory {
                product: product.into(),
                category: category.map(Into::into),
            })
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Product>> {
        let model = products::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateProduct) -> InventoryResult<Product> {
        let txn = self.db.begin().await?;

        ensure_category_exists(&txn, input.category_id).await?;

        let active_model: products::ActiveModel = input.into();
        let model = active_model.insert(&txn).await?;

        insert_audit(
            &txn,
            AuditRecord::created(AuditEntity::Product, model.id, &model.name),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> InventoryResult<Product> {
        let txn = self.db.begin().await?;

        let existing = products::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(InventoryError::ProductNotFound(id))?;
        ensure_category_exists(&txn, input.category_id).await?;

        // Stock stays untouched; movements own it.
        let mut active_model: products::ActiveModel = existing.into();
        active_model.name = Set(input.name);
        active_model.price = Set(input.price);
        active_model.expires_at = Set(input.expires_at.map(Into::into));
        active_model.image_url = Set(input.image_url);
        active_model.active = Set(input.active);
        active_model.category_id = Set(input.category_id);
        let model = active_model.update(&txn).await?;

        insert_audit(
            &txn,
            AuditRecord::updated(AuditEntity::Product, id, &model.name),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> InventoryResult<()> {
        let txn = self.db.begin().await?;

        let existing = products::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(InventoryError::ProductNotFound(id))?;

        insert_audit(
            &txn,
            AuditRecord::deleted(AuditEntity::Product, id, &existing.name),
        )
        .await?;

        // Movement rows go with the product via ON DELETE CASCADE.
        products::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }
}
