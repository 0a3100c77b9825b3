use axum::{extract::State, response::IntoResponse, Json};
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::reports::DashboardReport;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;

const RECENT_LIMIT: i64 = 5;

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();

    let stats = state.stats_repo.dashboard_stats(&ctx.tenant_id, today).await?;
    let employees_by_department = state.stats_repo.employees_by_department(&ctx.tenant_id).await?;
    let recent_employees = state.stats_repo.recent_employees(&ctx.tenant_id, RECENT_LIMIT).await?;
    let recent_promotions = state.stats_repo.recent_promotions(&ctx.tenant_id, RECENT_LIMIT).await?;

    Ok(Json(DashboardReport {
        stats,
        employees_by_department,
        recent_employees,
        recent_promotions,
    }))
}
