/// PostgreSQL-backed store
///
/// Thin adapter from the [`Store`] trait to the model functions. Optional
/// lookups become [`StoreError::NotFound`] and `false` deletes likewise.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{Page, Store, StoreError, StoreResult};
use crate::db::pool::health_check;
use crate::models::{
    category::Category,
    product::{CreateProduct, Product, UpdateProduct},
    user::{CreateUser, User},
};

/// Store over a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wraps an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn found<T>(row: Option<T>) -> StoreResult<T> {
    row.ok_or(StoreError::NotFound)
}

fn deleted(removed: bool) -> StoreResult<()> {
    if removed {
        Ok(())
    } else {
        Err(StoreError::NotFound)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let user = User::create(&self.pool, data).await?;
        debug!(user_id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_user(&self, username: &str) -> StoreResult<User> {
        found(User::find_by_username(&self.pool, username).await?)
    }

    async fn list_users(&self, page: Page) -> StoreResult<Vec<User>> {
        Ok(User::list(&self.pool, page).await?)
    }

    async fn create_category(&self, name: &str) -> StoreResult<Category> {
        let category = Category::create(&self.pool, name).await?;
        debug!(category_id = category.id, "Created category");
        Ok(category)
    }

    async fn get_category(&self, id: i64) -> StoreResult<Category> {
        found(Category::find_by_id(&self.pool, id).await?)
    }

    async fn get_category_by_name(&self, name: &str) -> StoreResult<Category> {
        found(Category::find_by_name(&self.pool, name).await?)
    }

    async fn list_categories(&self, page: Page) -> StoreResult<Vec<Category>> {
        Ok(Category::list(&self.pool, page).await?)
    }

    async fn update_category(&self, id: i64, name: &str) -> StoreResult<Category> {
        found(Category::update(&self.pool, id, name).await?)
    }

    async fn delete_category(&self, id: i64) -> StoreResult<()> {
        deleted(Category::delete(&self.pool, id).await?)
    }

    async fn create_product(&self, data: CreateProduct) -> StoreResult<Product> {
        let product = Product::create(&self.pool, data).await?;
        debug!(
            product_id = product.id,
            user_id = product.user_id,
            category_id = product.category_id,
            "Created product"
        );
        Ok(product)
    }

    async fn get_product(&self, id: i64) -> StoreResult<Product> {
        found(Product::find_by_id(&self.pool, id).await?)
    }

    async fn list_products(&self, page: Page) -> StoreResult<Vec<Product>> {
        Ok(Product::list(&self.pool, page).await?)
    }

    async fn update_product(&self, id: i64, data: UpdateProduct) -> StoreResult<Product> {
        found(Product::update(&self.pool, id, data).await?)
    }

    async fn delete_product(&self, id: i64) -> StoreResult<()> {
        deleted(Product::delete(&self.pool, id).await?)
    }
}
