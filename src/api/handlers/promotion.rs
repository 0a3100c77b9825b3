use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreatePromotionRequest, PageQuery, UpdatePromotionRequest};
use crate::api::dtos::responses::Paginated;
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::promotion::{NewPromotionParams, Promotion};
use crate::domain::services::transitions;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

pub async fn create_promotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreatePromotionRequest>,
) -> Result<impl IntoResponse, AppError> {
    // The old position and salary are snapshotted from the employee record,
    // never taken from the request.
    let employee = state
        .employee_repo
        .find_by_id(&ctx.tenant_id, &payload.employee_id)
        .await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let promotion = Promotion::new(NewPromotionParams {
        tenant_id: ctx.tenant_id.clone(),
        user_id: ctx.user_id.clone(),
        employee_id: employee.id,
        ancien_poste: employee.poste,
        nouveau_poste: payload.nouveau_poste,
        ancien_salaire: employee.salaire,
        nouveau_salaire: payload.nouveau_salaire,
        date_vigueur: payload.date_vigueur,
    });

    let created = state.promotion_repo.create(&promotion).await?;
    info!("Promotion created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_promotions(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let promotions = state.promotion_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;
    Ok(Json(Paginated::new(promotions, page, PER_PAGE)))
}

pub async fn get_promotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let promotion = state
        .promotion_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Promotion not found".into()))?;
    Ok(Json(promotion))
}

pub async fn update_promotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePromotionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut promotion = state
        .promotion_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Promotion not found".into()))?;

    transitions::ensure_pending(promotion.statut)?;

    if let Some(nouveau_poste) = payload.nouveau_poste {
        promotion.nouveau_poste = nouveau_poste;
    }
    if let Some(nouveau_salaire) = payload.nouveau_salaire {
        promotion.nouveau_salaire = nouveau_salaire;
    }
    if let Some(date_vigueur) = payload.date_vigueur {
        promotion.date_vigueur = date_vigueur;
    }
    promotion.montant_augmentation = promotion.nouveau_salaire - promotion.ancien_salaire;

    let updated = state.promotion_repo.update(&promotion).await?;
    info!("Promotion updated: {}", id);
    Ok(Json(updated))
}

pub async fn apply_promotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let applied = state.promotion_repo.apply(&ctx.tenant_id, &id).await?;
    info!("Promotion applied: {}", id);
    Ok(Json(applied))
}

pub async fn cancel_promotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cancelled = state.promotion_repo.cancel(&ctx.tenant_id, &id).await?;
    info!("Promotion cancelled: {}", id);
    Ok(Json(cancelled))
}

pub async fn delete_promotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.promotion_repo.delete(&ctx.tenant_id, &id).await?;
    info!("Promotion deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
