use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{
    AuditEntity, AuditFilter, AuditRecord, Category, ChangeLogEntry, CreateCategory,
    CreateProduct, CreateStockMovement, MovementWithProduct, Product, ProductWithCategory,
    StockMovement, UpdateCategory, UpdateProduct,
};
use crate::repository::{AuditRepository, CategoryRepository, ProductRepository, StockRepository};

#[derive(Debug, Default)]
struct StoreInner {
    categories: HashMap<i32, Category>,
    products: HashMap<i32, Product>,
    movements: Vec<StockMovement>,
    change_log: Vec<ChangeLogEntry>,
    next_category_id: i32,
    next_product_id: i32,
    next_movement_id: i32,
    next_entry_id: i32,
}

impl StoreInner {
    fn append_audit(&mut self, record: AuditRecord) {
        self.next_entry_id += 1;
        self.change_log.push(ChangeLogEntry {
            id: self.next_entry_id,
            entity: record.entity,
            entity_id: record.entity_id,
            action: record.action,
            details: record.details,
            created_at: Utc::now(),
        });
    }
}

/// In-memory backend implementing all four repository traits.
///
/// One store must back every repository handed to the services: the
/// cross-entity rules (category references, stock + movement + audit as a
/// single step) only hold when the collections share a write lock. Clones
/// share the underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryInventoryStore {
    async fn list(&self) -> InventoryResult<Vec<Category>> {
        let inner = self.inner.read().await;
        let mut categories: Vec<Category> = inner.categories.values().cloned().collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Category>> {
        let inner = self.inner.read().await;
        Ok(inner.categories.get(&id).cloned())
    }

    async fn create(&self, input: CreateCategory) -> InventoryResult<Category> {
        let mut inner = self.inner.write().await;

        inner.next_category_id += 1;
        let category = Category {
            id: inner.next_category_id,
            name: input.name,
            description: input.description,
        };
        inner.categories.insert(category.id, category.clone());
        inner.append_audit(AuditRecord::created(
            AuditEntity::Category,
            category.id,
            &category.name,
        ));

        tracing::info!(category_id = category.id, "Created category");
        Ok(category)
    }

    async fn update(&self, id: i32, input: UpdateCategory) -> InventoryResult<Category> {
        let mut inner = self.inner.write().await;

        let category = {
            let existing = inner
                .categories
                .get_mut(&id)
                .ok_or(InventoryError::CategoryNotFound(id))?;
            existing.name = input.name;
            existing.description = input.description;
            existing.clone()
        };
        inner.append_audit(AuditRecord::updated(AuditEntity::Category, id, &category.name));

        tracing::info!(category_id = id, "Updated category");
        Ok(category)
    }

    async fn delete(&self, id: i32) -> InventoryResult<()> {
        let mut inner = self.inner.write().await;

        let category = inner
            .categories
            .get(&id)
            .cloned()
            .ok_or(InventoryError::CategoryNotFound(id))?;
        if inner.products.values().any(|p| p.category_id == id) {
            return Err(InventoryError::CategoryInUse(id));
        }

        inner.categories.remove(&id);
        inner.append_audit(AuditRecord::deleted(AuditEntity::Category, id, &category.name));

        tracing::info!(category_id = id, "Deleted category");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryInventoryStore {
    async fn list(&self) -> InventoryResult<Vec<ProductWithCategory>> {
        let inner = self.inner.read().await;
        let mut products: Vec<ProductWithCategory> = inner
            .products
            .values()
            .map(|p| ProductWithCategory {
                product: p.clone(),
                category: inner.categories.get(&p.category_id).cloned(),
            })
            .collect();
        products.sort_by_key(|p| p.product.id);
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> InventoryResult<Product> {
        let mut inner = self.inner.write().await;

        if !inner.categories.contains_key(&input.category_id) {
            return Err(InventoryError::CategoryRequired);
        }

        inner.next_product_id += 1;
        let product = Product {
            id: inner.next_product_id,
            name: input.name,
            price: input.price,
            stock: input.stock,
            expires_at: input.expires_at,
            image_url: input.image_url,
            active: input.active,
            category_id: input.category_id,
        };
        inner.products.insert(product.id, product.clone());
        inner.append_audit(AuditRecord::created(
            AuditEntity::Product,
            product.id,
            &product.name,
        ));

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> InventoryResult<Product> {
        let mut inner = self.inner.write().await;

        if !inner.products.contains_key(&id) {
            return Err(InventoryError::ProductNotFound(id));
        }
        if !inner.categories.contains_key(&input.category_id) {
            return Err(InventoryError::CategoryRequired);
        }

        let product = {
            let existing = inner
                .products
                .get_mut(&id)
                .ok_or(InventoryError::ProductNotFound(id))?;
            existing.name = input.name;
            existing.price = input.price;
            existing.expires_at = input.expires_at;
            existing.image_url = input.image_url;
            existing.active = input.active;
            existing.category_id = input.category_id;
            existing.clone()
        };
        inner.append_audit(AuditRecord::updated(AuditEntity::Product, id, &product.name));

        tracing::info!(product_id = id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> InventoryResult<()> {
        let mut inner = self.inner.write().await;

        let product = inner
            .products
            .remove(&id)
            .ok_or(InventoryError::ProductNotFound(id))?;
        // Movements belong to the product; they go with it.
        inner.movements.retain(|m| m.product_id != id);
        inner.append_audit(AuditRecord::deleted(AuditEntity::Product, id, &product.name));

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }
}

#[async_trait]
impl StockRepository for InMemoryInventoryStore {
    async fn list_products(&self) -> InventoryResult<Vec<Product>> {
        let inner = self.inner.read().await;
        let mut products: Vec<Product> = inner.products.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn list_movements(&self) -> InventoryResult<Vec<MovementWithProduct>> {
        let inner = self.inner.read().await;
        let mut movements: Vec<MovementWithProduct> = inner
            .movements
            .iter()
            .map(|m| MovementWithProduct {
                movement: m.clone(),
                product: inner.products.get(&m.product_id).cloned(),
            })
            .collect();
        movements.sort_by(|a, b| {
            b.movement
                .created_at
                .cmp(&a.movement.created_at)
                .then(b.movement.id.cmp(&a.movement.id))
        });
        Ok(movements)
    }

    async fn apply_movement(&self, input: CreateStockMovement) -> InventoryResult<StockMovement> {
        let mut inner = self.inner.write().await;

        let product = inner
            .products
            .get(&input.product_id)
            .cloned()
            .ok_or(InventoryError::ProductNotFound(input.product_id))?;
        let new_stock = input.kind.apply(product.stock, input.quantity)?;

        inner.next_movement_id += 1;
        let movement = StockMovement {
            id: inner.next_movement_id,
            product_id: input.product_id,
            kind: input.kind,
            quantity: input.quantity,
            notes: input.notes,
            created_at: Utc::now(),
        };

        if let Some(existing) = inner.products.get_mut(&input.product_id) {
            existing.stock = new_stock;
        }
        inner.movements.push(movement.clone());
        inner.append_audit(AuditRecord::movement(
            movement.id,
            movement.kind,
            movement.quantity,
            &product.name,
        ));

        tracing::info!(
            product_id = movement.product_id,
            movement_id = movement.id,
            kind = %movement.kind,
            stock = new_stock,
            "Recorded stock movement"
        );
        Ok(movement)
    }
}

#[async_trait]
impl AuditRepository for InMemoryInventoryStore {
    async fn list(&self, filter: AuditFilter) -> InventoryResult<Vec<ChangeLogEntry>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<ChangeLogEntry> = inner
            .change_log
            .iter()
            .filter(|e| filter.entity.map_or(true, |entity| e.entity == entity))
            .filter(|e| filter.action.map_or(true, |action| e.action == action))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit)
            .collect())
    }
}
