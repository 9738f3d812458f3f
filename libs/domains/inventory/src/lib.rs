//! Inventory Domain
//!
//! This module provides a complete domain implementation for managing
//! categories, products, stock movements and the audit change log.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! Every mutation appends a change log row in the same transaction as the
//! entity write, and stock is only ever changed through movements.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers,
//!     memory::InMemoryInventoryStore,
//!     service::CategoryService,
//! };
//!
//! // Create store and service
//! let store = InMemoryInventoryStore::new();
//! let service = CategoryService::new(store);
//!
//! // Create Axum router
//! let router = handlers::categories::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult};
pub use memory::InMemoryInventoryStore;
pub use models::{
    AuditAction, AuditEntity, AuditFilter, Category, ChangeLogEntry, CreateCategory,
    CreateProduct, CreateStockMovement, MovementKind, MovementWithProduct, Product,
    ProductWithCategory, StockMovement, UpdateCategory, UpdateProduct,
};
pub use postgres::{
    PgAuditRepository, PgCategoryRepository, PgProductRepository, PgStockRepository,
};
pub use repository::{AuditRepository, CategoryRepository, ProductRepository, StockRepository};
pub use service::{AuditService, CategoryService, ProductService, StockService};
