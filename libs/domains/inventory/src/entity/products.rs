use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{CreateProduct, Product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    pub stock: i32,
    pub expires_at: Option<DateTimeWithTimeZone>,
    pub image_url: Option<String>,
    pub active: bool,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Categories,
    #[sea_orm(has_many = "super::stock_movements::Entity")]
    StockMovements,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::stock_movements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockMovements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            stock: model.stock,
            expires_at: model.expires_at.map(Into::into),
            image_url: model.image_url,
            active: model.active,
            category_id: model.category_id,
        }
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        Self {
            name: Set(input.name),
            price: Set(input.price),
            stock: Set(input.stock),
            expires_at: Set(input.expires_at.map(Into::into)),
            image_url: Set(input.image_url),
            active: Set(input.active),
            category_id: Set(input.category_id),
            ..Default::default()
        }
    }
}
