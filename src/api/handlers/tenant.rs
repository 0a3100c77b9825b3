use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateTenantRequest, PageQuery, UpdateTenantRequest};
use crate::api::dtos::responses::Paginated;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::auth::Claims;
use crate::domain::models::tenant::Tenant;
use crate::domain::models::user::ROLE_ADMIN;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

fn require_admin(claims: &Claims) -> Result<(), AppError> {
    if claims.role != ROLE_ADMIN {
        return Err(AppError::Forbidden("Admin role required".into()));
    }
    Ok(())
}

pub async fn create_tenant(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateTenantRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&claims)?;

    if payload.access_code.trim().is_empty() {
        return Err(AppError::Validation("Le code d'accès est requis".into()));
    }

    let tenant = Tenant::new(payload.name, payload.country, payload.access_code, payload.ceo_name);
    let created = state.tenant_repo.create(&tenant).await?;

    info!("Tenant created: {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_tenants(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&claims)?;

    let page = query.page.unwrap_or(1).max(1);
    let tenants = state.tenant_repo.list(page, PER_PAGE).await?;
    Ok(Json(Paginated::new(tenants, page, PER_PAGE)))
}

pub async fn get_tenant(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&claims)?;

    let tenant = state
        .tenant_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Tenant not found".into()))?;
    Ok(Json(tenant))
}

pub async fn update_tenant(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTenantRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&claims)?;

    let mut tenant = state
        .tenant_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Tenant not found".into()))?;

    if let Some(name) = payload.name {
        tenant.name = name;
    }
    if let Some(country) = payload.country {
        tenant.country = country;
    }
    if let Some(access_code) = payload.access_code {
        if access_code.trim().is_empty() {
            return Err(AppError::Validation("Le code d'accès est requis".into()));
        }
        tenant.access_code = access_code;
    }
    if let Some(ceo_name) = payload.ceo_name {
        tenant.ceo_name = ceo_name;
    }

    let updated = state.tenant_repo.update(&tenant).await?;
    info!("Tenant updated: {}", id);
    Ok(Json(updated))
}

pub async fn toggle_tenant(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&claims)?;

    let mut tenant = state
        .tenant_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Tenant not found".into()))?;

    tenant.actif = !tenant.actif;
    let updated = state.tenant_repo.update(&tenant).await?;
    info!("Tenant {} actif: {}", id, updated.actif);
    Ok(Json(updated))
}

pub async fn delete_tenant(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&claims)?;

    let (users, employees) = state.tenant_repo.count_dependents(&id).await?;
    if users > 0 || employees > 0 {
        return Err(AppError::Conflict(
            "Le tenant possède encore des utilisateurs ou des employés".into(),
        ));
    }

    state.tenant_repo.delete(&id).await?;
    info!("Tenant deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
