use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create audit_entity enum
        manager
            .create_type(
                Type::create()
                    .as_enum(AuditEntity::Enum)
                    .values([
                        AuditEntity::Category,
                        AuditEntity::Product,
                        AuditEntity::StockMovement,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create audit_action enum
        manager
            .create_type(
                Type::create()
                    .as_enum(AuditAction::Enum)
                    .values([AuditAction::Create, AuditAction::Update, AuditAction::Delete])
                    .to_owned(),
            )
            .await?;

        // Create change_logs table; rows are append-only
        manager
            .create_table(
                Table::create()
                    .table(ChangeLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(ChangeLogs::Id))
                    .col(
                        ColumnDef::new(ChangeLogs::Entity)
                            .enumeration(
                                AuditEntity::Enum,
                                [
                                    AuditEntity::Category,
                                    AuditEntity::Product,
                                    AuditEntity::StockMovement,
                                ],
                            )
                            .not_null(),
                    )
                    .col(integer(ChangeLogs::EntityId))
                    .col(
                        ColumnDef::new(ChangeLogs::Action)
                            .enumeration(
                                AuditAction::Enum,
                                [AuditAction::Create, AuditAction::Update, AuditAction::Delete],
                            )
                            .not_null(),
                    )
                    .col(text(ChangeLogs::Details))
                    .col(
                        timestamp_with_time_zone(ChangeLogs::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_change_logs_entity")
                    .table(ChangeLogs::Table)
                    .col(ChangeLogs::Entity)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_change_logs_created_at")
                    .table(ChangeLogs::Table)
                    .col(ChangeLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChangeLogs::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(AuditAction::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(AuditEntity::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ChangeLogs {
    Table,
    Id,
    Entity,
    EntityId,
    Action,
    Details,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AuditEntity {
    #[sea_orm(iden = "audit_entity")]
    Enum,
    #[sea_orm(iden = "Category")]
    Category,
    #[sea_orm(iden = "Product")]
    Product,
    #[sea_orm(iden = "StockMovement")]
    StockMovement,
}

#[derive(DeriveIden)]
enum AuditAction {
    #[sea_orm(iden = "audit_action")]
    Enum,
    #[sea_orm(iden = "Create")]
    Create,
    #[sea_orm(iden = "Update")]
    Update,
    #[sea_orm(iden = "Delete")]
    Delete,
}
