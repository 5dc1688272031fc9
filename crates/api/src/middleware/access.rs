//! Enforcement of the configured [`CustomerAccessPolicy`].
//!
//! [`CustomerAccessPolicy`]: crm_core::access::CustomerAccessPolicy

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use crm_core::access::AccessDecision;
use crm_core::error::CoreError;
use crm_core::page_props::Flash;

use super::auth::{AuthUser, MaybeAuthUser};
use crate::error::AppError;
use crate::state::AppState;

/// A caller permitted to write customers under the current policy.
///
/// Holds the caller's identity when one was presented. Under the `open`
/// policy a bad token is ignored and the caller is treated as anonymous.
#[derive(Debug, Clone)]
pub struct CustomerWriter(pub Option<AuthUser>);

impl CustomerWriter {
    /// Queue a success message for the writer's next page, if they are known.
    pub async fn notify(&self, state: &AppState, message: &str) {
        if let Some(user) = &self.0 {
            state.flash.put(user.user_id, Flash::success(message)).await;
        }
    }
}

impl FromRequestParts<AppState> for CustomerWriter {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let policy = state.config.customer_access;

        let user = match MaybeAuthUser::from_request_parts(parts, state).await {
            Ok(MaybeAuthUser(user)) => user,
            Err(_) if !policy.requires_identity() => None,
            Err(e) => return Err(e),
        };

        match policy.decide(user.as_ref().map(|u| u.role.as_str())) {
            AccessDecision::Granted => Ok(CustomerWriter(user)),
            AccessDecision::Unauthenticated => {
                tracing::warn!(policy = policy.as_str(), "Anonymous customer write rejected");
                Err(AppError::Core(CoreError::Unauthorized(
                    "Authentication required".into(),
                )))
            }
            AccessDecision::Forbidden => {
                tracing::warn!(
                    policy = policy.as_str(),
                    user_id = user.as_ref().map(|u| u.user_id),
                    role = user.as_ref().map(|u| u.role.as_str()),
                    "Customer write forbidden for role"
                );
                Err(AppError::Core(CoreError::Forbidden(format!(
                    "The '{}' access policy does not permit this role",
                    policy.as_str()
                ))))
            }
        }
    }
}
