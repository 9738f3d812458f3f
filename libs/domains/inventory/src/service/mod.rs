mod audit;
mod categories;
mod products;
mod stock;

pub use audit::AuditService;
pub use categories::CategoryService;
pub use products::ProductService;
pub use stock::StockService;
