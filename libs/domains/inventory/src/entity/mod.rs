//! sea-orm entities for the four inventory tables.

pub mod categories;
pub mod change_logs;
pub mod products;
pub mod stock_movements;
