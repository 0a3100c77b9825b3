use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Tenant scope for business routes, derived only from the authenticated
/// principal's claims. Request paths and bodies never carry a tenant id.
/// Platform admins hold no tenant and are rejected here.
pub struct TenantContext {
    pub tenant_id: String,
    pub user_id: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        let tenant_id = claims.tenant_id.ok_or(AppError::TenantNotAssigned)?;

        Ok(TenantContext {
            tenant_id,
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
