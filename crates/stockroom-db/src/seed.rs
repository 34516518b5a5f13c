//! # Sample Data
//!
//! Reference products shared by the `seed` binary and the web app's
//! `STOCKROOM_SEED_SAMPLE_DATA` startup option.

use stockroom_core::{Money, Product, Repository};
use tracing::{info, warn};

use crate::error::DbResult;
use crate::repository::product::ProductRepository;

/// The two products every fresh database starts with.
pub fn reference_products() -> Vec<Product> {
    vec![
        Product::new("OstrichToy", "Grey", Money::from_cents(8512), 133),
        Product::new("FiberPen", "Blue", Money::from_cents(1200), 1500),
    ]
}

/// Inserts `products` unless the table already holds rows.
///
/// Individual insert failures are logged and skipped.
///
/// ## Returns
/// The number of products inserted (`0` when the table was not empty).
pub async fn seed_if_empty(
    repo: &ProductRepository,
    products: impl IntoIterator<Item = Product>,
) -> DbResult<usize> {
    let existing = repo.count().await?;
    if existing > 0 {
        warn!(existing, "Database already has products, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0usize;
    for product in products {
        let name = product.name.clone();
        match repo.create(product).await {
            Ok(_) => inserted += 1,
            Err(e) => warn!(name = %name, error = %e, "Failed to insert product"),
        }

        if inserted > 0 && inserted % 500 == 0 {
            info!(inserted, "Seeding in progress");
        }
    }

    info!(inserted, "Sample products inserted");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_seed_fills_empty_table_once() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        assert_eq!(seed_if_empty(&repo, reference_products()).await.unwrap(), 2);
        assert_eq!(seed_if_empty(&repo, reference_products()).await.unwrap(), 0);

        let stored = repo.get_all().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, 1);
        assert_eq!(stored[0].name, "OstrichToy");
        assert_eq!(stored[1].price, Money::from_cents(1200));
    }
}
