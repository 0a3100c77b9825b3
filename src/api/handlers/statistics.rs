use axum::{extract::State, response::IntoResponse, Json};
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::reports::StatisticsReport;
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Duration, Utc};
use std::sync::Arc;

const EVOLUTION_MONTHS: i64 = 12;
const TOP_DEPARTMENTS: i64 = 5;
const ATTENDANCE_DAYS: i64 = 30;

pub async fn statistics(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let today = now.date_naive();

    let stats = state.stats_repo.dashboard_stats(&ctx.tenant_id, today).await?;
    let total_promotions = state.stats_repo.count_promotions(&ctx.tenant_id).await?;
    let total_demotions = state.stats_repo.count_demotions(&ctx.tenant_id).await?;
    let employees_by_department = state.stats_repo.employees_by_department(&ctx.tenant_id).await?;
    let employees_by_contract = state.stats_repo.employees_by_contract(&ctx.tenant_id).await?;
    let salary_evolution = state
        .stats_repo
        .salary_evolution(&ctx.tenant_id, EVOLUTION_MONTHS)
        .await?;
    let top_departments = state
        .stats_repo
        .top_departments(&ctx.tenant_id, TOP_DEPARTMENTS)
        .await?;
    let attendance_stats = state
        .stats_repo
        .attendance_since(&ctx.tenant_id, now - Duration::days(ATTENDANCE_DAYS))
        .await?;

    Ok(Json(StatisticsReport {
        total_employees: stats.total_employees,
        total_promotions,
        total_demotions,
        total_pay_slips: stats.pay_slips_generated,
        employees_by_department,
        employees_by_contract,
        salary_evolution,
        top_departments,
        attendance_stats,
    }))
}

pub async fn department_statistics(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let stats = state.stats_repo.department_stats(&ctx.tenant_id).await?;
    Ok(Json(stats))
}

pub async fn salary_statistics(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let brackets = state.stats_repo.salary_brackets(&ctx.tenant_id).await?;
    Ok(Json(brackets))
}
