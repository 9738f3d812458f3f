use async_trait::async_trait;

use crate::error::InventoryResult;
use crate::models::{
    AuditFilter, Category, ChangeLogEntry, CreateCategory, CreateProduct, CreateStockMovement,
    MovementWithProduct, Product, ProductWithCategory, StockMovement, UpdateCategory,
    UpdateProduct,
};

/// Data access for categories.
///
/// Every mutation appends its change-log entry in the same unit of work as
/// the entity write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, no filtering or paging.
    async fn list(&self) -> InventoryResult<Vec<Category>>;

    /// Look up a category by id.
    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Category>>;

    /// Insert a category.
    async fn create(&self, input: CreateCategory) -> InventoryResult<Category>;

    /// Replace a category's fields. Fails when the id is absent.
    async fn update(&self, id: i32, input: UpdateCategory) -> InventoryResult<Category>;

    /// Remove a category. Fails while products still reference it.
    async fn delete(&self, id: i32) -> InventoryResult<()>;
}

/// Data access for products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, each joined with its category.
    async fn list(&self) -> InventoryResult<Vec<ProductWithCategory>>;

    /// Look up a product by id.
    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Product>>;

    /// Insert a product. The referenced category must exist.
    async fn create(&self, input: CreateProduct) -> InventoryResult<Product>;

    /// Replace a product's fields except its stock level.
    async fn update(&self, id: i32, input: UpdateProduct) -> InventoryResult<Product>;

    /// Remove a product together with its stock movements.
    async fn delete(&self, id: i32) -> InventoryResult<()>;
}

/// Data access for stock levels and movements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// All products, flat.
    async fn list_products(&self) -> InventoryResult<Vec<Product>>;

    /// All movements with their product, newest first.
    async fn list_movements(&self) -> InventoryResult<Vec<MovementWithProduct>>;

    /// Mutate the product's stock and record the movement plus its audit
    /// entry, all in one unit of work.
    async fn apply_movement(&self, input: CreateStockMovement) -> InventoryResult<StockMovement>;
}

/// Read access to the append-only change log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Change-log entries newest first, filtered and paged.
    async fn list(&self, filter: AuditFilter) -> InventoryResult<Vec<ChangeLogEntry>>;
}
