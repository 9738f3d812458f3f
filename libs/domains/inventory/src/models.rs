use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::InventoryError;

/// Stock movement kinds
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "movement_kind")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MovementKind {
    /// Goods received; adds to stock
    #[default]
    #[sea_orm(string_value = "IN")]
    In,
    /// Goods issued; bounded by the available stock
    #[sea_orm(string_value = "OUT")]
    Out,
    /// Recount; overwrites stock with the given quantity
    #[sea_orm(string_value = "ADJUST")]
    Adjust,
}

impl MovementKind {
    /// Stock level after applying a movement of `quantity` units to
    /// `current_stock`. ADJUST is an absolute set, not an increment.
    pub fn apply(self, current_stock: i32, quantity: i32) -> Result<i32, InventoryError> {
        match self {
            MovementKind::In => Ok(current_stock + quantity),
            MovementKind::Out if current_stock < quantity => {
                Err(InventoryError::InsufficientStock {
                    available: current_stock,
                    requested: quantity,
                })
            }
            MovementKind::Out => Ok(current_stock - quantity),
            MovementKind::Adjust => Ok(quantity),
        }
    }
}

/// Entity kinds recorded in the change log
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "audit_entity")]
pub enum AuditEntity {
    #[sea_orm(string_value = "Category")]
    Category,
    #[sea_orm(string_value = "Product")]
    Product,
    #[sea_orm(string_value = "StockMovement")]
    StockMovement,
}

/// Actions recorded in the change log
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "audit_action")]
pub enum AuditAction {
    #[sea_orm(string_value = "Create")]
    Create,
    #[sea_orm(string_value = "Update")]
    Update,
    #[sea_orm(string_value = "Delete")]
    Delete,
}

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: i32,
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Current stock level; mutated only through stock movements
    pub stock: i32,
    /// Optional expiry date
    pub expires_at: Option<DateTime<Utc>>,
    /// Optional image reference
    pub image_url: Option<String>,
    /// Whether the product is active in the catalog
    pub active: bool,
    /// Owning category
    pub category_id: i32,
}

/// Product joined with its category for list views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category: Option<Category>,
}

/// A single stock movement. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockMovement {
    /// Unique identifier
    pub id: i32,
    /// Product the movement applies to
    pub product_id: i32,
    pub kind: MovementKind,
    /// Units moved (IN/OUT) or the absolute level (ADJUST)
    pub quantity: i32,
    /// Optional free-text notes
    pub notes: Option<String>,
    /// Recording timestamp
    pub created_at: DateTime<Utc>,
}

/// Stock movement joined with its product for list views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovementWithProduct {
    pub movement: StockMovement,
    pub product: Option<Product>,
}

/// One row of the append-only change log
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeLogEntry {
    /// Unique identifier
    pub id: i32,
    /// Kind of entity the entry describes
    pub entity: AuditEntity,
    /// Identifier of the affected entity
    pub entity_id: i32,
    pub action: AuditAction,
    /// Human-readable description of the change
    pub details: String,
    /// Recording timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(max = 255))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for replacing a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(length(max = 255))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(max = 255))]
    pub name: String,
    pub price: Decimal,
    /// Initial stock level; later changes go through stock movements
    #[serde(default)]
    pub stock: i32,
    pub expires_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub category_id: i32,
}

/// DTO for replacing a product. Stock is absent on purpose; it is mutated
/// only through stock movements.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(max = 255))]
    pub name: String,
    pub price: Decimal,
    pub expires_at: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub category_id: i32,
}

fn default_active() -> bool {
    true
}

/// DTO for recording a stock movement
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStockMovement {
    pub product_id: i32,
    #[serde(default)]
    pub kind: MovementKind,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Query filters for listing change-log entries
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditFilter {
    /// Restrict to one entity kind
    pub entity: Option<AuditEntity>,
    /// Restrict to one action
    pub action: Option<AuditAction>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for AuditFilter {
    fn default() -> Self {
        Self {
            entity: None,
            action: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_limit() -> usize {
    50
}

/// Change-log payload written in the same transaction as the entity
/// mutation it describes. Owns the fixed `details` formats.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub entity: AuditEntity,
    pub entity_id: i32,
    pub action: AuditAction,
    pub details: String,
}

impl AuditRecord {
    pub fn created(entity: AuditEntity, entity_id: i32, name: &str) -> Self {
        Self {
            entity,
            entity_id,
            action: AuditAction::Create,
            details: format!("{entity} '{name}' created"),
        }
    }

    pub fn updated(entity: AuditEntity, entity_id: i32, name: &str) -> Self {
        Self {
            entity,
            entity_id,
            action: AuditAction::Update,
            details: format!("{entity} '{name}' updated"),
        }
    }

    pub fn deleted(entity: AuditEntity, entity_id: i32, name: &str) -> Self {
        Self {
            entity,
            entity_id,
            action: AuditAction::Delete,
            details: format!("{entity} '{name}' deleted"),
        }
    }

    /// Entry describing a recorded stock movement.
    pub fn movement(
        movement_id: i32,
        kind: MovementKind,
        quantity: i32,
        product_name: &str,
    ) -> Self {
        Self {
            entity: AuditEntity::StockMovement,
            entity_id: movement_id,
            action: AuditAction::Create,
            details: format!("Movimiento {kind} de {quantity} para '{product_name}'"),
        }
    }
}
