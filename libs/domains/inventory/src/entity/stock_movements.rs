use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{CreateStockMovement, MovementKind, StockMovement};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_movements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub kind: MovementKind,
    pub quantity: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StockMovement {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            kind: model.kind,
            quantity: model.quantity,
            notes: model.notes,
            created_at: model.created_at.into(),
        }
    }
}

/// `created_at` stays unset; the column default fills it on insert.
impl From<CreateStockMovement> for ActiveModel {
    fn from(input: CreateStockMovement) -> Self {
        Self {
            product_id: Set(input.product_id),
            kind: Set(input.kind),
            quantity: Set(input.quantity),
            notes: Set(input.notes),
            ..Default::default()
        }
    }
}
