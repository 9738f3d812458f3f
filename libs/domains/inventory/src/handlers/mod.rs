pub mod audit;
pub mod categories;
pub mod products;
pub mod stock;
