use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{
    CreateOrgChartRequest, GenerateOrgChartRequest, PageQuery, UpdateOrgChartRequest,
};
use crate::api::dtos::responses::Paginated;
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::org_chart::{OrgNode, OrganizationalChart};
use crate::error::AppError;
use crate::state::AppState;
use sqlx::types::Json as SqlJson;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

pub async fn create_org_chart(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreateOrgChartRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.structure.validate()?;

    let chart = OrganizationalChart::new(
        ctx.tenant_id.clone(),
        ctx.user_id.clone(),
        payload.nom,
        payload.description,
        payload.structure,
    );

    let created = state.org_chart_repo.create(&chart).await?;
    info!("Org chart created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_org_charts(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let charts = state.org_chart_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;
    Ok(Json(Paginated::new(charts, page, PER_PAGE)))
}

pub async fn get_org_chart(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let chart = state
        .org_chart_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Organizational chart not found".into()))?;
    Ok(Json(chart))
}

pub async fn update_org_chart(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrgChartRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut chart = state
        .org_chart_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Organizational chart not found".into()))?;

    if let Some(nom) = payload.nom {
        chart.nom = nom;
    }
    if let Some(description) = payload.description {
        chart.description = Some(description);
    }
    if let Some(structure) = payload.structure {
        structure.validate()?;
        chart.structure = SqlJson(structure);
    }
    if let Some(actif) = payload.actif {
        chart.actif = actif;
    }

    let updated = state.org_chart_repo.update(&chart).await?;
    info!("Org chart updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_org_chart(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.org_chart_repo.delete(&ctx.tenant_id, &id).await?;
    info!("Org chart deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Builds a chart from the live department breakdown: tenant at the root,
/// one child per department carrying its headcount.
pub async fn generate_from_departments(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<GenerateOrgChartRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tenant = state
        .tenant_repo
        .find_by_id(&ctx.tenant_id)
        .await?
        .ok_or(AppError::NotFound("Tenant not found".into()))?;

    let departments = state.stats_repo.employees_by_department(&ctx.tenant_id).await?;
    if departments.is_empty() {
        return Err(AppError::Validation("Aucun employé actif pour générer l'organigramme".into()));
    }

    let children = departments
        .into_iter()
        .map(|d| OrgNode {
            name: d.departement,
            title: "Département".to_string(),
            employee_count: d.count,
            children: vec![],
        })
        .collect();

    let structure = OrgNode {
        name: tenant.name.clone(),
        title: tenant.ceo_name.clone(),
        employee_count: 0,
        children,
    };
    structure.validate()?;

    let nom = payload.nom.unwrap_or_else(|| format!("Organigramme {}", tenant.name));
    let chart = OrganizationalChart::new(
        ctx.tenant_id.clone(),
        ctx.user_id.clone(),
        nom,
        Some("Généré à partir des départements".to_string()),
        structure,
    );

    let created = state.org_chart_repo.create(&chart).await?;
    info!("Org chart generated from departments: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}
