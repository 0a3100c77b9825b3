use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateTrackingRequest, TrackingListQuery, UpdateTrackingRequest};
use crate::api::dtos::responses::{Paginated, TrackingDashboard};
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::tracking::{
    EmployeeTracking, NewTrackingParams, EVENT_ARRIVEE, EVENT_CONGE, EVENT_MALADIE,
};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Datelike, Duration, Utc};
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 20;

pub async fn create_tracking(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreateTrackingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state
        .employee_repo
        .find_by_id(&ctx.tenant_id, &payload.employee_id)
        .await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let tracking = EmployeeTracking::new(NewTrackingParams {
        tenant_id: ctx.tenant_id.clone(),
        user_id: ctx.user_id.clone(),
        employee_id: employee.id,
        type_evenement: payload.type_evenement,
        date_heure: payload.date_heure,
        lieu: payload.lieu,
        commentaire: payload.commentaire,
    });

    let created = state.tracking_repo.create(&tracking).await?;
    info!("Tracking entry created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_trackings(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<TrackingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let entries = state
        .tracking_repo
        .list(
            &ctx.tenant_id,
            query.date,
            query.employee_id.as_deref(),
            page,
            PER_PAGE,
        )
        .await?;
    Ok(Json(Paginated::new(entries, page, PER_PAGE)))
}

pub async fn get_tracking(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state
        .tracking_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Tracking entry not found".into()))?;
    Ok(Json(entry))
}

pub async fn update_tracking(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTrackingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut entry = state
        .tracking_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Tracking entry not found".into()))?;

    if let Some(employee_id) = payload.employee_id {
        state
            .employee_repo
            .find_by_id(&ctx.tenant_id, &employee_id)
            .await?
            .ok_or(AppError::NotFound("Employee not found".into()))?;
        entry.employee_id = employee_id;
    }
    if let Some(type_evenement) = payload.type_evenement {
        entry.type_evenement = type_evenement;
    }
    if let Some(date_heure) = payload.date_heure {
        entry.date_heure = date_heure;
    }
    if let Some(lieu) = payload.lieu {
        entry.lieu = Some(lieu);
    }
    if let Some(commentaire) = payload.commentaire {
        entry.commentaire = Some(commentaire);
    }
    if let Some(statut) = payload.statut {
        entry.statut = Some(statut);
    }

    let updated = state.tracking_repo.update(&entry).await?;
    info!("Tracking entry updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_tracking(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.tracking_repo.delete(&ctx.tenant_id, &id).await?;
    info!("Tracking entry deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Today's arrivals and absences plus event-type counts for the current
/// week (Monday to now).
pub async fn tracking_dashboard(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let today = now.date_naive();

    let arrivees_du_jour = state
        .tracking_repo
        .list_by_day_and_types(&ctx.tenant_id, today, &[EVENT_ARRIVEE])
        .await?;

    let absences_du_jour = state
        .tracking_repo
        .list_by_day_and_types(&ctx.tenant_id, today, &[EVENT_CONGE, EVENT_MALADIE])
        .await?;

    let week_start = (now - Duration::days(today.weekday().num_days_from_monday() as i64))
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .ok_or(AppError::Internal)?
        .and_utc();
    let statistiques_semaine = state
        .tracking_repo
        .count_by_type_between(&ctx.tenant_id, week_start, now)
        .await?;

    Ok(Json(TrackingDashboard {
        arrivees_du_jour,
        absences_du_jour,
        statistiques_semaine,
    }))
}
