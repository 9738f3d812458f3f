use std::sync::Arc;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{CreateStockMovement, MovementWithProduct, Product, StockMovement};
use crate::repository::StockRepository;

/// Service layer for stock movement business logic
#[derive(Clone)]
pub struct StockService<R: StockRepository> {
    repository: Arc<R>,
}

impl<R: StockRepository> StockService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products with their current stock levels
    pub async fn list_products(&self) -> InventoryResult<Vec<Product>> {
        self.repository.list_products().await
    }

    /// List all movements, newest first
    pub async fn list_movements(&self) -> InventoryResult<Vec<MovementWithProduct>> {
        self.repository.list_movements().await
    }

    /// Record a movement and apply it to the product's stock
    pub async fn record_movement(
        &self,
        input: CreateStockMovement,
    ) -> InventoryResult<StockMovement> {
        // Both ids and quantities are rejected before the product lookup.
        if input.product_id <= 0 || input.quantity <= 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        self.repository.apply_movement(input).await
    }
}
