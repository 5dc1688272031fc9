//! Handlers for the `/users` resource (admin provisioning).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crm_core::page_props::PageUser;
use crm_db::models::user::CreateUser;
use crm_db::repositories::{RoleRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "The first name field is required."))]
    pub first_name: String,
    #[validate(length(min = 1, message = "The last name field is required."))]
    pub last_name: String,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,
    #[validate(length(min = 12, message = "The password must be at least 12 characters."))]
    pub password: String,
    /// Role name (`admin`, `manager`, `viewer`).
    pub role: String,
}

/// A created user together with their role name.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: PageUser,
    pub role: String,
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    input.validate()?;

    let role = RoleRepo::find_by_name(&state.pool, &input.role)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", input.role)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, created_by = admin.user_id, role = %role.name, "User created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse {
                user: user.into(),
                role: role.name,
            },
        }),
    ))
}
