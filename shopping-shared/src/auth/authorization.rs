/// Ownership checks
///
/// Single-item product reads, updates and deletes are only allowed for the
/// product's owner. The check runs after the product has been fetched and
/// the caller's user row has been resolved, and before anything is returned
/// or mutated:
///
/// ```text
/// fetch resource ──missing──> not found
///       │
/// resolve caller ──fails────> internal error
///       │
/// owner == caller? ──no─────> forbidden
///       │
///   proceed
/// ```
///
/// # Example
///
/// ```
/// use shopping_shared::auth::authorization::{require_ownership, Action, AuthzError};
/// use shopping_shared::models::{product::Product, user::User};
///
/// fn check(product: &Product, caller: &User) -> Result<(), AuthzError> {
///     require_ownership(product, caller, Action::Update)
/// }
/// ```

use std::fmt;

use crate::models::{product::Product, user::User};

/// Error type for authorization checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// Caller doesn't own the resource
    #[error("you can only {action} your own {resource}")]
    NotOwner {
        action: Action,
        resource: &'static str,
    },
}

/// What the caller is trying to do with a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource with a single owning user
pub trait Owned {
    /// Plural noun used in error messages
    const RESOURCE: &'static str;

    /// ID of the owning user
    fn owner_id(&self) -> i64;
}

impl Owned for Product {
    const RESOURCE: &'static str = "products";

    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// Allows the action only if `caller` owns `resource`
pub fn require_ownership<R: Owned>(
    resource: &R,
    caller: &User,
    action: Action,
) -> Result<(), AuthzError> {
    if resource.owner_id() != caller.id {
        return Err(AuthzError::NotOwner {
            action,
            resource: R::RESOURCE,
        });
    }

    Ok(())
}
