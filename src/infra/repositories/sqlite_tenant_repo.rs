use crate::domain::{models::tenant::Tenant, ports::TenantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteTenantRepo {
    pool: SqlitePool,
}

impl SqliteTenantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantRepository for SqliteTenantRepo {
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, AppError> {
        sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (id, name, country, access_code, ceo_name, actif, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&tenant.id)
            .bind(&tenant.name)
            .bind(&tenant.country)
            .bind(&tenant.access_code)
            .bind(&tenant.ceo_name)
            .bind(tenant.actif)
            .bind(tenant.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE access_code = ?")
            .bind(access_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, page: i64, per_page: i64) -> Result<Vec<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>(
            "SELECT * FROM tenants ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, AppError> {
        sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET name = ?, country = ?, access_code = ?, ceo_name = ?, actif = ? WHERE id = ? RETURNING *",
        )
            .bind(&tenant.name)
            .bind(&tenant.country)
            .bind(&tenant.access_code)
            .bind(&tenant.ceo_name)
            .bind(tenant.actif)
            .bind(&tenant.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tenant not found".into()));
        }
        Ok(())
    }

    async fn count_dependents(&self, id: &str) -> Result<(i64, i64), AppError> {
        let row = sqlx::query(
            "SELECT \
                (SELECT COUNT(*) FROM users WHERE tenant_id = ?) AS users, \
                (SELECT COUNT(*) FROM employees WHERE tenant_id = ?) AS employees",
        )
            .bind(id)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok((row.get::<i64, _>("users"), row.get::<i64, _>("employees")))
    }
}
