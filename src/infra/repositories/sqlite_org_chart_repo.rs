use crate::domain::{models::org_chart::OrganizationalChart, ports::OrgChartRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteOrgChartRepo {
    pool: SqlitePool,
}

impl SqliteOrgChartRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrgChartRepository for SqliteOrgChartRepo {
    async fn create(&self, chart: &OrganizationalChart) -> Result<OrganizationalChart, AppError> {
        sqlx::query_as::<_, OrganizationalChart>(
            "INSERT INTO organizational_charts (id, tenant_id, user_id, nom, description, structure, actif, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&chart.id)
            .bind(&chart.tenant_id)
            .bind(&chart.user_id)
            .bind(&chart.nom)
            .bind(&chart.description)
            .bind(&chart.structure)
            .bind(chart.actif)
            .bind(chart.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<OrganizationalChart>, AppError> {
        sqlx::query_as::<_, OrganizationalChart>(
            "SELECT * FROM organizational_charts WHERE tenant_id = ? AND id = ?",
        )
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(
        &self,
        tenant_id: &str,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<OrganizationalChart>, AppError> {
        sqlx::query_as::<_, OrganizationalChart>(
            "SELECT * FROM organizational_charts WHERE tenant_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
            .bind(tenant_id)
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, chart: &OrganizationalChart) -> Result<OrganizationalChart, AppError> {
        sqlx::query_as::<_, OrganizationalChart>(
            "UPDATE organizational_charts SET nom = ?, description = ?, structure = ?, actif = ? WHERE id = ? AND tenant_id = ? RETURNING *",
        )
            .bind(&chart.nom)
            .bind(&chart.description)
            .bind(&chart.structure)
            .bind(chart.actif)
            .bind(&chart.id)
            .bind(&chart.tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM organizational_charts WHERE id = ? AND tenant_id = ?")
            .bind(id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Organizational chart not found".into()));
        }
        Ok(())
    }
}
