use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create movement_kind enum
        manager
            .create_type(
                Type::create()
                    .as_enum(MovementKind::Enum)
                    .values([MovementKind::In, MovementKind::Out, MovementKind::Adjust])
                    .to_owned(),
            )
            .await?;

        // Create stock_movements table
        manager
            .create_table(
                Table::create()
                    .table(StockMovements::Table)
                    .if_not_exists()
                    .col(pk_auto(StockMovements::Id))
                    .col(integer(StockMovements::ProductId))
                    .col(
                        ColumnDef::new(StockMovements::Kind)
                            .enumeration(
                                MovementKind::Enum,
                                [MovementKind::In, MovementKind::Out, MovementKind::Adjust],
                            )
                            .not_null(),
                    )
                    .col(integer(StockMovements::Quantity))
                    .col(text_null(StockMovements::Notes))
                    .col(
                        timestamp_with_time_zone(StockMovements::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        // CASCADE: movement history goes with its product
                        ForeignKey::create()
                            .name("fk_stock_movements_product_id")
                            .from(StockMovements::Table, StockMovements::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_stock_movements_product_id")
                    .table(StockMovements::Table)
                    .col(StockMovements::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stock_movements_created_at")
                    .table(StockMovements::Table)
                    .col(StockMovements::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockMovements::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(MovementKind::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StockMovements {
    Table,
    Id,
    ProductId,
    Kind,
    Quantity,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MovementKind {
    #[sea_orm(iden = "movement_kind")]
    Enum,
    #[sea_orm(iden = "IN")]
    In,
    #[sea_orm(iden = "OUT")]
    Out,
    #[sea_orm(iden = "ADJUST")]
    Adjust,
}
