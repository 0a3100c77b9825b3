use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateDemotionRequest, PageQuery, UpdateDemotionRequest};
use crate::api::dtos::responses::Paginated;
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::demotion::{Demotion, NewDemotionParams};
use crate::domain::services::transitions;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

pub async fn create_demotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreateDemotionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.motif_demotion.trim().is_empty() {
        return Err(AppError::Validation("Le motif de la rétrogradation est requis".into()));
    }

    let employee = state
        .employee_repo
        .find_by_id(&ctx.tenant_id, &payload.employee_id)
        .await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let demotion = Demotion::new(NewDemotionParams {
        tenant_id: ctx.tenant_id.clone(),
        user_id: ctx.user_id.clone(),
        employee_id: employee.id,
        ancien_poste: employee.poste,
        nouveau_poste: payload.nouveau_poste,
        ancien_salaire: employee.salaire,
        nouveau_salaire: payload.nouveau_salaire,
        motif_demotion: payload.motif_demotion,
        date_vigueur: payload.date_vigueur,
    });

    let created = state.demotion_repo.create(&demotion).await?;
    info!("Demotion created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_demotions(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let demotions = state.demotion_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;
    Ok(Json(Paginated::new(demotions, page, PER_PAGE)))
}

pub async fn get_demotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let demotion = state
        .demotion_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Demotion not found".into()))?;
    Ok(Json(demotion))
}

pub async fn update_demotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDemotionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut demotion = state
        .demotion_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Demotion not found".into()))?;

    transitions::ensure_pending(demotion.statut)?;

    if let Some(nouveau_poste) = payload.nouveau_poste {
        demotion.nouveau_poste = nouveau_poste;
    }
    if let Some(nouveau_salaire) = payload.nouveau_salaire {
        demotion.nouveau_salaire = nouveau_salaire;
    }
    if let Some(motif) = payload.motif_demotion {
        demotion.motif_demotion = motif;
    }
    if let Some(date_vigueur) = payload.date_vigueur {
        demotion.date_vigueur = date_vigueur;
    }
    demotion.montant_reduction = demotion.ancien_salaire - demotion.nouveau_salaire;

    let updated = state.demotion_repo.update(&demotion).await?;
    info!("Demotion updated: {}", id);
    Ok(Json(updated))
}

pub async fn apply_demotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let applied = state.demotion_repo.apply(&ctx.tenant_id, &id).await?;
    info!("Demotion applied: {}", id);
    Ok(Json(applied))
}

pub async fn cancel_demotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cancelled = state.demotion_repo.cancel(&ctx.tenant_id, &id).await?;
    info!("Demotion cancelled: {}", id);
    Ok(Json(cancelled))
}

pub async fn delete_demotion(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.demotion_repo.delete(&ctx.tenant_id, &id).await?;
    info!("Demotion deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
