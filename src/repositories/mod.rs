// Repositories module - data access layer

pub mod cart_repository;
pub mod catalog_repository;
pub mod stock_repository;

pub use cart_repository::{CartRepository, JsonFileCartRepository};
pub use catalog_repository::{CatalogRepository, HttpCatalogRepository};
pub use stock_repository::{HttpStockRepository, StockRepository};
