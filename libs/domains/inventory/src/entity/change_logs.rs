use sea_orm::entity::prelude::*;

use crate::models::{AuditAction, AuditEntity, ChangeLogEntry};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "change_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entity: AuditEntity,
    pub entity_id: i32,
    pub action: AuditAction,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ChangeLogEntry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            entity: model.entity,
            entity_id: model.entity_id,
            action: model.action,
            details: model.details,
            created_at: model.created_at.into(),
        }
    }
}
