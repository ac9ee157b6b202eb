/// Middleware modules
///
/// - `auth`: Bearer token verification for protected routes

pub mod auth;
