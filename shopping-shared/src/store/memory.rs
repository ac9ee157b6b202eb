/// In-memory store
///
/// Mirrors the PostgreSQL schema closely enough for handler tests: ids are
/// assigned from per-table sequences starting at 1, usernames, emails and
/// category names are unique, products must reference an existing user and
/// category, and a category still referenced by a product cannot be deleted.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use super::{Page, Store, StoreError, StoreResult};
use crate::models::{
    category::Category,
    product::{CreateProduct, Product, UpdateProduct},
    user::{CreateUser, User},
};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    categories: BTreeMap<i64, Category>,
    products: BTreeMap<i64, Product>,
    user_seq: i64,
    category_seq: i64,
    product_seq: i64,
}

impl Tables {
    fn require_category(&self, id: i64) -> StoreResult<()> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::ForeignKey("products_category_id_fkey".to_string()))
        }
    }
}

/// Store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn window<'a, T: Clone + 'a>(rows: impl Iterator<Item = &'a T>, page: Page) -> Vec<T> {
    let offset = usize::try_from(page.offset).unwrap_or(0);
    let limit = usize::try_from(page.limit).unwrap_or(0);
    rows.skip(offset).take(limit).cloned().collect()
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let mut tables = self.tables();

        if tables.users.values().any(|u| u.username == data.username) {
            return Err(StoreError::Conflict("users_username_key".to_string()));
        }
        if tables.users.values().any(|u| u.email == data.email) {
            return Err(StoreError::Conflict("users_email_key".to_string()));
        }

        tables.user_seq += 1;
        let user = User {
            id: tables.user_seq,
            username: data.username,
            email: data.email,
            hashed_password: data.hashed_password,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn get_user(&self, username: &str) -> StoreResult<User> {
        self.tables()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_users(&self, page: Page) -> StoreResult<Vec<User>> {
        Ok(window(self.tables().users.values(), page))
    }

    async fn create_category(&self, name: &str) -> StoreResult<Category> {
        let mut tables = self.tables();

        if tables.categories.values().any(|c| c.name == name) {
            return Err(StoreError::Conflict("categories_name_key".to_string()));
        }

        tables.category_seq += 1;
        let category = Category {
            id: tables.category_seq,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        tables.categories.insert(category.id, category.clone());

        Ok(category)
    }

    async fn get_category(&self, id: i64) -> StoreResult<Category> {
        self.tables()
            .categories
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_category_by_name(&self, name: &str) -> StoreResult<Category> {
        self.tables()
            .categories
            .values()
            .find(|c| c.name == name)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_categories(&self, page: Page) -> StoreResult<Vec<Category>> {
        Ok(window(self.tables().categories.values(), page))
    }

    async fn update_category(&self, id: i64, name: &str) -> StoreResult<Category> {
        let mut tables = self.tables();

        if tables.categories.values().any(|c| c.name == name && c.id != id) {
            return Err(StoreError::Conflict("categories_name_key".to_string()));
        }

        let category = tables.categories.get_mut(&id).ok_or(StoreError::NotFound)?;
        category.name = name.to_string();

        Ok(category.clone())
    }

    async fn delete_category(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.tables();

        if !tables.categories.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        if tables.products.values().any(|p| p.category_id == id) {
            return Err(StoreError::ForeignKey("products_category_id_fkey".to_string()));
        }

        tables.categories.remove(&id);
        Ok(())
    }

    async fn create_product(&self, data: CreateProduct) -> StoreResult<Product> {
        let mut tables = self.tables();

        if !tables.users.contains_key(&data.user_id) {
            return Err(StoreError::ForeignKey("products_user_id_fkey".to_string()));
        }
        tables.require_category(data.category_id)?;

        tables.product_seq += 1;
        let now = Utc::now();
        let product = Product {
            id: tables.product_seq,
            name: data.name,
            size: data.size,
            weight: data.weight,
            price: data.price,
            user_id: data.user_id,
            category_id: data.category_id,
            created_at: now,
            updated_at: now,
        };
        tables.products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn get_product(&self, id: i64) -> StoreResult<Product> {
        self.tables()
            .products
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_products(&self, page: Page) -> StoreResult<Vec<Product>> {
        Ok(window(self.tables().products.values(), page))
    }

    async fn update_product(&self, id: i64, data: UpdateProduct) -> StoreResult<Product> {
        let mut tables = self.tables();

        if !tables.products.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        if let Some(category_id) = data.category_id {
            tables.require_category(category_id)?;
        }

        let product = tables.products.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(name) = data.name {
            product.name = name;
        }
        if let Some(size) = data.size {
            product.size = size;
        }
        if let Some(weight) = data.weight {
            product.weight = weight;
        }
        if let Some(price) = data.price {
            product.price = price;
        }
        if let Some(category_id) = data.category_id {
            product.category_id = category_id;
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete_product(&self, id: i64) -> StoreResult<()> {
        self.tables()
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
