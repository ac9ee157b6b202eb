/// Persistence abstraction
///
/// Handlers never touch SQL directly. They hold an `Arc<dyn Store>` and call
/// one operation per step, sequentially, within a request. Two
/// implementations are provided:
///
/// - [`PgStore`]: PostgreSQL via sqlx, used by the server binary
/// - [`MemoryStore`]: in-process maps with the same constraints, used by tests
///
/// # Missing Rows
///
/// Every lookup, update and delete of a row that doesn't exist returns
/// [`StoreError::NotFound`]. Callers decide whether that means 404, 400 or 500.
///
/// # Example
///
/// ```no_run
/// use shopping_shared::store::{MemoryStore, Page, Store};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// let category = store.create_category("shoes").await?;
/// let first_page = store.list_categories(Page::new(5, 0)).await?;
/// assert_eq!(first_page, vec![category]);
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;

use crate::models::{
    category::Category,
    product::{CreateProduct, Product, UpdateProduct},
    user::{CreateUser, User},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested row doesn't exist
    #[error("no rows in result set")]
    NotFound,

    /// A unique constraint was violated (names the constraint)
    #[error("duplicate value violates unique constraint {0}")]
    Conflict(String),

    /// A referenced row doesn't exist, or a referenced row is still in use
    #[error("foreign key constraint violated: {0}")]
    ForeignKey(String),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict(db_err.constraint().unwrap_or("unique").to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                StoreError::ForeignKey(db_err.constraint().unwrap_or("foreign key").to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// A window of rows: `LIMIT limit OFFSET offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of rows to return
    pub limit: i64,

    /// Number of rows to skip
    pub offset: i64,
}

impl Page {
    /// Creates a page from a raw limit and offset
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Creates a page from a 1-based page number and a page size
    ///
    /// The offset is `(page_id - 1) * page_size`. Pages past the end simply
    /// yield no rows.
    pub fn from_page_number(page_id: i32, page_size: i32) -> Self {
        let limit = i64::from(page_size);
        let offset = (i64::from(page_id) - 1) * limit;
        Self { limit, offset }
    }
}

/// CRUD operations per entity
#[async_trait]
pub trait Store: Send + Sync {
    /// Checks the backing storage is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Creates a user; duplicate username or email is a [`StoreError::Conflict`]
    async fn create_user(&self, data: CreateUser) -> StoreResult<User>;

    /// Fetches a user by username
    async fn get_user(&self, username: &str) -> StoreResult<User>;

    /// Lists users ordered by ID
    async fn list_users(&self, page: Page) -> StoreResult<Vec<User>>;

    /// Creates a category; duplicate name is a [`StoreError::Conflict`]
    async fn create_category(&self, name: &str) -> StoreResult<Category>;

    /// Fetches a category by ID
    async fn get_category(&self, id: i64) -> StoreResult<Category>;

    /// Fetches a category by name
    async fn get_category_by_name(&self, name: &str) -> StoreResult<Category>;

    /// Lists categories ordered by ID
    async fn list_categories(&self, page: Page) -> StoreResult<Vec<Category>>;

    /// Renames a category
    async fn update_category(&self, id: i64, name: &str) -> StoreResult<Category>;

    /// Deletes a category
    async fn delete_category(&self, id: i64) -> StoreResult<()>;

    /// Creates a product
    async fn create_product(&self, data: CreateProduct) -> StoreResult<Product>;

    /// Fetches a product by ID
    async fn get_product(&self, id: i64) -> StoreResult<Product>;

    /// Lists products ordered by ID
    async fn list_products(&self, page: Page) -> StoreResult<Vec<Product>>;

    /// Applies a partial update to a product
    async fn update_product(&self, id: i64, data: UpdateProduct) -> StoreResult<Product>;

    /// Deletes a product
    async fn delete_product(&self, id: i64) -> StoreResult<()>;
}
