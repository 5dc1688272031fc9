//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::MaybeAuthUser`] -- Same, but anonymous callers are allowed.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`access::CustomerWriter`] -- Applies the configured customer access policy.

pub mod access;
pub mod auth;
pub mod rbac;
