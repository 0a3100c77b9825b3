use crate::domain::{models::pay_slip::PaySlip, ports::PaySlipRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePaySlipRepo {
    pool: SqlitePool,
}

impl SqlitePaySlipRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaySlipRepository for SqlitePaySlipRepo {
    async fn create(&self, slip: &PaySlip) -> Result<PaySlip, AppError> {
        // The unique index on (tenant_id, employee_id, mois, annee) is the
        // real duplicate-period guard; callers' pre-checks only improve the
        // error message.
        sqlx::query_as::<_, PaySlip>(
            "INSERT INTO pay_slips (id, tenant_id, user_id, employee_id, mois, annee, salaire_brut, cotisations, salaire_net, statut, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&slip.id)
            .bind(&slip.tenant_id)
            .bind(&slip.user_id)
            .bind(&slip.employee_id)
            .bind(&slip.mois)
            .bind(slip.annee)
            .bind(slip.salaire_brut)
            .bind(slip.cotisations)
            .bind(slip.salaire_net)
            .bind(slip.statut)
            .bind(slip.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<PaySlip>, AppError> {
        sqlx::query_as::<_, PaySlip>("SELECT * FROM pay_slips WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_period(
        &self,
        tenant_id: &str,
        employee_id: &str,
        mois: &str,
        annee: i64,
    ) -> Result<Option<PaySlip>, AppError> {
        sqlx::query_as::<_, PaySlip>(
            "SELECT * FROM pay_slips WHERE tenant_id = ? AND employee_id = ? AND mois = ? AND annee = ?",
        )
            .bind(tenant_id)
            .bind(employee_id)
            .bind(mois)
            .bind(annee)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<PaySlip>, AppError> {
        sqlx::query_as::<_, PaySlip>(
            "SELECT * FROM pay_slips WHERE tenant_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
            .bind(tenant_id)
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn cancel(&self, tenant_id: &str, id: &str) -> Result<PaySlip, AppError> {
        sqlx::query_as::<_, PaySlip>(
            "UPDATE pay_slips SET statut = 'Annulée' WHERE id = ? AND tenant_id = ? RETURNING *",
        )
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Pay slip not found".into()))
    }

    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM pay_slips WHERE id = ? AND tenant_id = ?")
            .bind(id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Pay slip not found".into()));
        }
        Ok(())
    }
}
