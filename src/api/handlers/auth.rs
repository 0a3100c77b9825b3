use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{AccessCodeRequest, LoginRequest};
use crate::api::dtos::responses::AccessCodeResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::error::AppError;
use crate::state::AppState;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use std::sync::Arc;
use time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::info;

const GATE_COOKIE: &str = "tenant_gate";
const ACCESS_COOKIE: &str = "access_token";

/// Pre-authentication gate. Emails are unique per tenant, not globally, so
/// the resolved tenant id is staged in a short-lived cookie to scope the
/// following login's email lookup. It carries no authorization.
pub async fn access_code(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<AccessCodeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tenant = state
        .tenant_repo
        .find_by_access_code(&payload.access_code)
        .await?
        .filter(|t| t.actif)
        .ok_or(AppError::Unauthorized)?;

    let mut gate = Cookie::new(GATE_COOKIE, tenant.id.clone());
    gate.set_http_only(true);
    gate.set_secure(true);
    gate.set_same_site(SameSite::Strict);
    gate.set_path("/");
    gate.set_max_age(Duration::minutes(10));
    cookies.add(gate);

    Ok(Json(AccessCodeResponse { tenant_name: tenant.name }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    // With a staged tenant the lookup is tenant-scoped; without one only a
    // platform admin can match.
    let user = match cookies.get(GATE_COOKIE) {
        Some(gate) => {
            let tenant_id = gate.value().to_string();
            state
                .tenant_repo
                .find_by_id(&tenant_id)
                .await?
                .filter(|t| t.actif)
                .ok_or(AppError::Unauthorized)?;
            state.user_repo.find_by_email(&tenant_id, &payload.email).await?
        }
        None => state.user_repo.find_admin_by_email(&payload.email).await?,
    }
    .filter(|u| u.actif)
    .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&user.password_hash).map_err(|_| AppError::Internal)?;
    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let (access_jwt, csrf_token) = state.auth_service.issue_token(&user)?;

    let mut access_c = Cookie::new(ACCESS_COOKIE, access_jwt);
    access_c.set_http_only(true);
    access_c.set_secure(true);
    access_c.set_same_site(SameSite::Strict);
    access_c.set_path("/");
    access_c.set_max_age(Duration::hours(8));
    cookies.add(access_c);

    cookies.remove(Cookie::build((GATE_COOKIE, "")).path("/").into());

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        csrf_token,
        user: UserProfile {
            id: user.id,
            nom: user.nom,
            prenom: user.prenom,
            email: user.email,
            role: user.role,
            tenant_id: user.tenant_id,
        },
    }))
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    cookies.remove(Cookie::build((ACCESS_COOKIE, "")).path("/").into());
    cookies.remove(Cookie::build((GATE_COOKIE, "")).path("/").into());

    info!("User logged out");

    StatusCode::OK
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = match &claims.tenant_id {
        Some(tenant_id) => state.user_repo.find_by_id(tenant_id, &claims.sub).await?,
        None => state.user_repo.find_admin_by_id(&claims.sub).await?,
    }
    .ok_or(AppError::Unauthorized)?;

    Ok(Json(UserProfile {
        id: user.id,
        nom: user.nom,
        prenom: user.prenom,
        email: user.email,
        role: user.role,
        tenant_id: user.tenant_id,
    }))
}
