//! # Controllers
//!
//! Both controllers depend only on `Arc<dyn Repository<Product>>`, so the
//! same code runs against SQLite in production and the recording fake in
//! tests.
//!
//! - [`products`] - HTML page flow (`/products/*`)
//! - [`products_api`] - REST flow (`/api/products`)

pub mod products;
pub mod products_api;

pub use products::{PageResult, ProductsController};
pub use products_api::{ApiResponse, ProductsApiController};
