//! # Product Repository
//!
//! SQLite implementation of `Repository<Product>`.
//!
//! ## Column Mapping
//! ```text
//! ┌──────────────────────┬────────────────────────────────────────────┐
//! │ Product field        │ product column                             │
//! ├──────────────────────┼────────────────────────────────────────────┤
//! │ id     i64           │ id          INTEGER PRIMARY KEY AUTOINCR.  │
//! │ name   String        │ name        TEXT  CHECK (length <= 100)    │
//! │ color  String        │ color       TEXT  CHECK (length <= 50)     │
//! │ price  Money         │ price_cents INTEGER (fixed 2 decimals)     │
//! │ stock  i64           │ stock       INTEGER                        │
//! └──────────────────────┴────────────────────────────────────────────┘
//! ```
//!
//! Queries are checked at runtime, so building the crate does not need a
//! live `DATABASE_URL`.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{Entity, Money, Product, RepoResult, Repository};

/// One `product` row as SQLite returns it.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    color: String,
    price_cents: i64,
    stock: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            color: row.color,
            price: Money::from_cents(row.price_cents),
            stock: row.stock,
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let created = repo.create(Product::new("OstrichToy", "Grey", price, 133)).await?;
/// let found = repo.get_by_id(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Counts stored products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn fetch_all(&self) -> DbResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, color, price_cents, stock
            FROM product
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, color, price_cents, stock
            FROM product
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Inserts a product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored product, carrying its id
    /// * `Err(DbError::UniqueViolation)` - An explicit id is already taken
    async fn insert(&self, mut product: Product) -> DbResult<Product> {
        debug!(name = %product.name, id = product.id, "Inserting product");

        let query = if product.has_id() {
            sqlx::query(
                r#"
                INSERT INTO product (id, name, color, price_cents, stock)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(product.id)
        } else {
            // SQLite hands out the next AUTOINCREMENT value
            sqlx::query(
                r#"
                INSERT INTO product (name, color, price_cents, stock)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
        };

        let result = query
            .bind(&product.name)
            .bind(&product.color)
            .bind(product.price.cents())
            .bind(product.stock)
            .execute(&self.pool)
            .await?;

        product.set_id(result.last_insert_rowid());
        Ok(product)
    }

    async fn update_row(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE product SET
                name = ?2,
                color = ?3,
                price_cents = ?4,
                stock = ?5
            WHERE id = ?1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.color)
        .bind(product.price.cents())
        .bind(product.stock)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Product::ENTITY_NAME, product.id));
        }

        Ok(())
    }

    async fn delete_row(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Deleting product");

        let result = sqlx::query("DELETE FROM product WHERE id = ?1")
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Product::ENTITY_NAME, product.id));
        }

        Ok(())
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn get_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.fetch_all().await?)
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        Ok(self.fetch_by_id(id).await?)
    }

    async fn create(&self, product: Product) -> RepoResult<Product> {
        Ok(self.insert(product).await?)
    }

    async fn update(&self, product: &Product) -> RepoResult<()> {
        Ok(self.update_row(product).await?)
    }

    async fn delete(&self, product: &Product) -> RepoResult<()> {
        Ok(self.delete_row(product).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
