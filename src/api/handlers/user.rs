use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateUserRequest, PageQuery, UpdateUserRequest};
use crate::api::dtos::responses::Paginated;
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::user::{is_valid_role, User};
use crate::error::AppError;
use crate::state::AppState;
use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_role(&payload.role) {
        return Err(AppError::Validation(format!("Rôle invalide: {}", payload.role)));
    }

    // Fast path for a clearer message; the unique index still decides.
    if state
        .user_repo
        .find_by_email(&ctx.tenant_id, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Un utilisateur avec cet email existe déjà".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(
        Some(ctx.tenant_id.clone()),
        payload.nom,
        payload.prenom,
        payload.email,
        payload.role,
        password_hash,
    );

    let created = state.user_repo.create(&user).await?;
    info!("User created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let users = state.user_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;
    Ok(Json(Paginated::new(users, page, PER_PAGE)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state
        .user_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(nom) = payload.nom {
        user.nom = nom;
    }
    if let Some(prenom) = payload.prenom {
        user.prenom = prenom;
    }
    if let Some(email) = payload.email {
        if email != user.email
            && state
                .user_repo
                .find_by_email(&ctx.tenant_id, &email)
                .await?
                .is_some()
        {
            return Err(AppError::Conflict("Un utilisateur avec cet email existe déjà".into()));
        }
        user.email = email;
    }
    if let Some(role) = payload.role {
        if !is_valid_role(&role) {
            return Err(AppError::Validation(format!("Rôle invalide: {role}")));
        }
        user.role = role;
    }
    if let Some(password) = payload.password {
        user.password_hash = hash_password(&password)?;
    }

    let updated = state.user_repo.update(&user).await?;
    info!("User updated: {}", id);
    Ok(Json(updated))
}

pub async fn toggle_user(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state
        .user_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    user.actif = !user.actif;
    let updated = state.user_repo.update(&user).await?;
    info!("User {} actif: {}", id, updated.actif);
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.user_repo.soft_delete(&ctx.tenant_id, &id).await?;
    info!("User deactivated: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
