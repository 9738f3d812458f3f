use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, TransactionTrait,
};

use super::insert_audit;
use crate::entity::{products, stock_movements};
use crate::error::{InventoryError, InventoryResult};
use crate::models::{
    AuditRecord, CreateStockMovement, MovementWithProduct, Product, StockMovement,
};
use crate::repository::StockRepository;

pub struct PgStockRepository {
    db: DatabaseConnection,
}

impl PgStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    async fn list_products(&self) -> InventoryResult<Vec<Product>> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_movements(&self) -> InventoryResult<Vec<MovementWithProduct>> {
        let rows = stock_movements::Entity::find()
            .find_also_related(products::Entity)
            .order_by_desc(stock_movements::Column::CreatedAt)
            .order_by_desc(stock_movements::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(movement, product)| MovementWithProduct {
                movement: movement.into(),
                product: product.map(Into::into),
            })
            .collect())
    }

    async fn apply_movement(&self, input: CreateStockMovement) -> InventoryResult<StockMovement> {
        let txn = self.db.begin().await?;

        // Row lock so concurrent movements against one product serialize.
        let product = products::Entity::find_by_id(input.product_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(InventoryError::ProductNotFound(input.product_id))?;

        let new_stock = input.kind.apply(product.stock, input.quantity)?;
        let product_name = product.name.clone();

        let mut product_model: products::ActiveModel = product.into();
        product_model.stock = Set(new_stock);
        product_model.update(&txn).await?;

        let active_model: stock_movements::ActiveModel = input.into();
        let movement = active_model.insert(&txn).await?;

        insert_audit(
            &txn,
            AuditRecord::movement(movement.id, movement.kind, movement.quantity, &product_name),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            product_id = movement.product_id,
            movement_id = movement.id,
            kind = %movement.kind,
            stock = new_stock,
            "Recorded stock movement"
        );
        Ok(movement.into())
    }
}
