/// Authentication and authorization utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing
/// - [`jwt`]: Token issue and verification
/// - [`middleware`]: `Authorization` header parsing into an [`middleware::AuthPayload`]
/// - [`authorization`]: Ownership checks for owner-scoped resources

pub mod authorization;
pub mod jwt;
pub mod middleware;
pub mod password;
