//! # Repository Module
//!
//! SQLite implementations of the `Repository<T>` contract.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Controller                                                            │
//! │       │                                                                 │
//! │       │  repo.get_by_id(3)                                              │
//! │       ▼                                                                 │
//! │  ProductRepository (impl Repository<Product>)                          │
//! │  ├── get_all()                                                         │
//! │  ├── get_by_id(id)                                                     │
//! │  ├── create(product)                                                   │
//! │  ├── update(&product)                                                  │
//! │  └── delete(&product)                                                  │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (product table)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
