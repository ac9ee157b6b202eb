/// Database models for the shopping service
///
/// Each model owns its SQL and exposes associated functions taking a
/// `&PgPool`. Handlers don't call these directly; they go through
/// [`crate::store::Store`].
///
/// # Models
///
/// - `user`: Registered accounts
/// - `category`: Named product groupings
/// - `product`: Sellable items owned by a user

pub mod category;
pub mod product;
pub mod user;
