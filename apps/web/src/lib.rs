//! # Stockroom Web Library
//!
//! Product pages and REST API over a `Repository<Product>`.
//!
//! ## Module Organization
//! ```text
//! stockroom_web/
//! ├── lib.rs              ◄─── You are here
//! ├── config.rs           ◄─── Environment configuration
//! ├── error.rs            ◄─── WebError (HTTP status + JSON body)
//! ├── binding.rs          ◄─── Form → (Product, ModelState)
//! ├── routes.rs           ◄─── axum Router, handlers, AppState
//! └── controllers/
//!     ├── products.rs     ◄─── Page flow (PageResult)
//!     └── products_api.rs ◄─── REST flow (ApiResponse)
//! ```
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP request                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  routes.rs handler ── extracts Path / Form / Json                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Controller ── one lookup, at most one mutation                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PageResult / ApiResponse / WebError ── IntoResponse                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod binding;
pub mod config;
pub mod controllers;
pub mod error;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use error::{ErrorCode, WebError, WebResult};
pub use routes::{build_router, AppState};
