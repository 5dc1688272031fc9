use std::sync::Arc;

use crm_core::page_props::RouteConfig;

use crate::config::ServerConfig;
use crate::flash::FlashStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: crm_db::DbPool,
    /// Server configuration (accessed by extractors and handlers).
    pub config: Arc<ServerConfig>,
    /// Pending one-time messages for the next rendered view.
    pub flash: Arc<FlashStore>,
    /// Named routes published to clients, built once at startup.
    pub routes: Arc<RouteConfig>,
}

impl AppState {
    pub fn new(pool: crm_db::DbPool, config: ServerConfig) -> Self {
        let routes = crate::routes::route_config(&config.app_url, config.port);
        Self {
            pool,
            config: Arc::new(config),
            flash: Arc::new(FlashStore::new()),
            routes: Arc::new(routes),
        }
    }
}
