use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreatePaySlipRequest, GenerateAllPaySlipsRequest, PageQuery};
use crate::api::dtos::responses::{GenerateAllResponse, Paginated};
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::pay_slip::PaySlip;
use crate::domain::services::months;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

fn validate_period(mois: &str, annee: i64) -> Result<(), AppError> {
    if !months::is_valid_name(mois) {
        return Err(AppError::Validation(format!("Mois invalide: {mois}")));
    }
    if !(2000..=2100).contains(&annee) {
        return Err(AppError::Validation(format!("Année invalide: {annee}")));
    }
    Ok(())
}

pub async fn create_pay_slip(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreatePaySlipRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_period(&payload.mois, payload.annee)?;

    let employee = state
        .employee_repo
        .find_by_id(&ctx.tenant_id, &payload.employee_id)
        .await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    // Pre-check for a friendly message; the unique index on the period is
    // what actually prevents the duplicate. A cancelled slip still blocks.
    if state
        .pay_slip_repo
        .find_by_period(&ctx.tenant_id, &employee.id, &payload.mois, payload.annee)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "Un bulletin existe déjà pour cet employé sur cette période".into(),
        ));
    }

    let slip = PaySlip::generate(
        ctx.tenant_id.clone(),
        ctx.user_id.clone(),
        employee.id,
        payload.mois,
        payload.annee,
        employee.salaire,
    );

    let created = state.pay_slip_repo.create(&slip).await?;
    info!("Pay slip created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn generate_all(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<GenerateAllPaySlipsRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_period(&payload.mois, payload.annee)?;

    let employees = state.employee_repo.list_active(&ctx.tenant_id).await?;

    let mut generated = 0i64;
    for employee in employees {
        if state
            .pay_slip_repo
            .find_by_period(&ctx.tenant_id, &employee.id, &payload.mois, payload.annee)
            .await?
            .is_some()
        {
            continue;
        }

        let slip = PaySlip::generate(
            ctx.tenant_id.clone(),
            ctx.user_id.clone(),
            employee.id,
            payload.mois.clone(),
            payload.annee,
            employee.salaire,
        );
        state.pay_slip_repo.create(&slip).await?;
        generated += 1;
    }

    info!("Generated {} pay slips for {} {}", generated, payload.mois, payload.annee);
    Ok(Json(GenerateAllResponse { generated }))
}

pub async fn list_pay_slips(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let slips = state.pay_slip_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;
    Ok(Json(Paginated::new(slips, page, PER_PAGE)))
}

pub async fn get_pay_slip(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let slip = state
        .pay_slip_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Pay slip not found".into()))?;
    Ok(Json(slip))
}

pub async fn cancel_pay_slip(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cancelled = state.pay_slip_repo.cancel(&ctx.tenant_id, &id).await?;
    info!("Pay slip cancelled: {}", id);
    Ok(Json(cancelled))
}

pub async fn delete_pay_slip(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.pay_slip_repo.delete(&ctx.tenant_id, &id).await?;
    info!("Pay slip deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
