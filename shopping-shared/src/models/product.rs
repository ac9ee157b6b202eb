/// Product model and database operations
///
/// A product belongs to exactly one user (its creator) and one category.
/// The owner never changes after creation; the category may be reassigned.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE products (
///     id BIGSERIAL PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     size VARCHAR(8) NOT NULL,
///     weight BIGINT NOT NULL DEFAULT 0,
///     price BIGINT NOT NULL,
///     user_id BIGINT NOT NULL REFERENCES users(id),
///     category_id BIGINT NOT NULL REFERENCES categories(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use shopping_shared::models::product::{CreateProduct, Product, UpdateProduct};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let product = Product::create(&pool, CreateProduct {
///     name: "hoodie".to_string(),
///     size: "L".to_string(),
///     weight: 700,
///     price: 4500,
///     user_id: 1,
///     category_id: 3,
/// }).await?;
///
/// // Only the price changes, everything else is kept
/// let update = UpdateProduct { price: Some(3900), ..Default::default() };
/// Product::update(&pool, product.id, update).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::store::Page;

/// Sizes the fixture generators draw from
pub const PRODUCT_SIZES: [&str; 4] = ["S", "M", "L", "XL"];

/// Product model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// Size label (S, M, L, XL by convention)
    pub size: String,

    /// Weight in grams
    pub weight: i64,

    /// Price in minor currency units
    pub price: i64,

    /// Owner (creator) of the product
    pub user_id: i64,

    /// Category the product is listed under
    pub category_id: i64,

    /// When the product was created
    pub created_at: DateTime<Utc>,

    /// When the product was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub size: String,
    pub weight: i64,
    pub price: i64,
    pub user_id: i64,
    pub category_id: i64,
}

/// Input for updating a product
///
/// Only `Some` fields are written. The owner cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub size: Option<String>,
    pub weight: Option<i64>,
    pub price: Option<i64>,
    pub category_id: Option<i64>,
}

const PRODUCT_COLUMNS: &str =
    "id, name, size, weight, price, user_id, category_id, created_at, updated_at";

impl Product {
    /// Creates a new product
    ///
    /// # Errors
    ///
    /// Returns a foreign key violation if the user or category doesn't exist.
    pub async fn create(pool: &PgPool, data: CreateProduct) -> Result<Self, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, size, weight, price, user_id, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {PRODUCT_COLUMNS}"
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(data.name)
            .bind(data.size)
            .bind(data.weight)
            .bind(data.price)
            .bind(data.user_id)
            .bind(data.category_id)
            .fetch_one(pool)
            .await
    }

    /// Finds a product by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Lists products ordered by ID
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Self>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT $1 OFFSET $2"
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Updates the mutable fields of a product
    ///
    /// `updated_at` is always refreshed; `id`, `user_id` and `created_at`
    /// are never touched.
    ///
    /// # Returns
    ///
    /// The updated product, None if it doesn't exist
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: UpdateProduct,
    ) -> Result<Option<Self>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 size = COALESCE($3, size), \
                 weight = COALESCE($4, weight), \
                 price = COALESCE($5, price), \
                 category_id = COALESCE($6, category_id), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(data.name)
            .bind(data.size)
            .bind(data.weight)
            .bind(data.price)
            .bind(data.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Deletes a product by ID
    ///
    /// # Returns
    ///
    /// True if the product was deleted, false if it didn't exist
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
