pub mod auth;
pub mod customer;
pub mod health;
pub mod users;

use axum::routing::get;
use axum::Router;
use crm_core::page_props::RouteConfig;

use crate::handlers::page;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                     login (public)
/// /users                          create (admin only)
///
/// /page-props                     shared view props (requires auth)
/// /routes                         routing config (public)
///
/// /customers                      list, create
/// /customers/validate             dry-run validation
/// /customers/{id}                 get, update, delete
/// /customers/{id}/restore         restore
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .route("/page-props", get(page::page_props))
        .route("/routes", get(page::routes))
        .nest("/customers", customer::router())
}

/// Named routes published to clients. Must stay in step with [`api_routes`].
pub fn route_config(app_url: &str, port: u16) -> RouteConfig {
    RouteConfig::new(app_url, Some(port))
        .route("health", "/health", &["GET"])
        .route("login", "/api/v1/auth/login", &["POST"])
        .route("users.store", "/api/v1/users", &["POST"])
        .route("page-props", "/api/v1/page-props", &["GET"])
        .route("routes", "/api/v1/routes", &["GET"])
        .route("customers.index", "/api/v1/customers", &["GET", "HEAD"])
        .route("customers.store", "/api/v1/customers", &["POST"])
        .route("customers.validate", "/api/v1/customers/validate", &["POST"])
        .route("customers.show", "/api/v1/customers/{id}", &["GET", "HEAD"])
        .route("customers.update", "/api/v1/customers/{id}", &["PUT"])
        .route("customers.destroy", "/api/v1/customers/{id}", &["DELETE"])
        .route(
            "customers.restore",
            "/api/v1/customers/{id}/restore",
            &["POST"],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_config_names_every_customer_route() {
        let config = route_config("http://localhost:3000", 3000);
        for name in [
            "customers.index",
            "customers.store",
            "customers.validate",
            "customers.show",
            "customers.update",
            "customers.destroy",
            "customers.restore",
        ] {
            assert!(config.routes.contains_key(name), "missing route {name}");
        }
        assert_eq!(config.routes["customers.show"].parameters, vec!["id"]);
        assert_eq!(config.port, Some(3000));
    }
}
