pub use sea_orm_migration::prelude::*;

mod m20250715_000000_create_categories;
mod m20250715_000001_create_products;
mod m20250715_000002_create_stock_movements;
mod m20250715_000003_create_change_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250715_000000_create_categories::Migration),
            Box::new(m20250715_000001_create_products::Migration),
            Box::new(m20250715_000002_create_stock_movements::Migration),
            Box::new(m20250715_000003_create_change_logs::Migration),
        ]
    }
}
