//! Handlers serving the data contract consumed by client views.

use axum::extract::State;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::page_props::{Auth, PageProps, RouteConfig};
use crm_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ApiQuery;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    /// Path the client is rendering (default `/`).
    pub location: Option<String>,
}

/// GET /api/v1/page-props
///
/// Shared props for the caller's next view. Any pending flash message is
/// consumed.
pub async fn page_props(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<LocationQuery>,
) -> AppResult<Json<PageProps>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let flash = state.flash.take(user.id).await;
    let location = query.location.unwrap_or_else(|| "/".to_string());

    Ok(Json(PageProps {
        auth: Auth { user: user.into() },
        flash,
        routes: state.routes.at(location),
    }))
}

/// GET /api/v1/routes
pub async fn routes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LocationQuery>,
) -> Json<RouteConfig> {
    let location = query.location.unwrap_or_else(|| "/".to_string());
    Json(state.routes.at(location))
}
