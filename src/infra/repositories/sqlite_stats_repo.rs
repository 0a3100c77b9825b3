use crate::domain::models::{
    employee::Employee,
    promotion::Promotion,
    reports::{
        ContractCount, DashboardStats, DepartmentCount, DepartmentStat, EventTypeCount,
        SalaryBracket, SalaryEvolutionPoint, TopDepartment,
    },
};
use crate::domain::ports::StatsRepository;
use crate::domain::services::months;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sqlx::{Row, SqlitePool};

pub struct SqliteStatsRepo {
    pool: SqlitePool,
}

impl SqliteStatsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn scalar(&self, sql: &str, tenant_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query(sql)
            .bind(tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>(0))
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepo {
    async fn dashboard_stats(&self, tenant_id: &str, today: NaiveDate) -> Result<DashboardStats, AppError> {
        let total_employees = self
            .scalar("SELECT COUNT(*) FROM employees WHERE tenant_id = ? AND actif = 1", tenant_id)
            .await?;
        let total_users = self
            .scalar("SELECT COUNT(*) FROM users WHERE tenant_id = ? AND actif = 1", tenant_id)
            .await?;
        let total_posts = self
            .scalar("SELECT COUNT(*) FROM posts WHERE tenant_id = ?", tenant_id)
            .await?;
        let promotions_scheduled = self
            .scalar(
                "SELECT COUNT(*) FROM promotions WHERE tenant_id = ? AND statut = 'En attente'",
                tenant_id,
            )
            .await?;
        let demotions_scheduled = self
            .scalar(
                "SELECT COUNT(*) FROM demotions WHERE tenant_id = ? AND statut = 'En attente'",
                tenant_id,
            )
            .await?;
        let pay_slips_generated = self
            .scalar(
                "SELECT COUNT(*) FROM pay_slips WHERE tenant_id = ? AND statut = 'Générée'",
                tenant_id,
            )
            .await?;

        let this_month = today.format("%Y-%m").to_string();
        let row = sqlx::query(
            "SELECT COUNT(*) FROM employees WHERE tenant_id = ? AND actif = 1 AND strftime('%Y-%m', created_at) = ?",
        )
            .bind(tenant_id)
            .bind(&this_month)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        let employees_added_this_month = row.get::<i64, _>(0);

        let row = sqlx::query(
            "SELECT COUNT(*) FROM promotions WHERE tenant_id = ? AND statut = 'En attente' AND date_vigueur > ?",
        )
            .bind(tenant_id)
            .bind(today)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        let upcoming_promotions = row.get::<i64, _>(0);

        let (prev_year, prev_month) = months::previous(today.year(), today.month());
        let row = sqlx::query(
            "SELECT COUNT(*) FROM pay_slips WHERE tenant_id = ? AND mois = ? AND annee = ?",
        )
            .bind(tenant_id)
            .bind(prev_month)
            .bind(prev_year as i64)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        let pay_slips_last_month = row.get::<i64, _>(0);

        Ok(DashboardStats {
            total_employees,
            total_users,
            total_posts,
            promotions_scheduled,
            demotions_scheduled,
            pay_slips_generated,
            employees_added_this_month,
            upcoming_promotions,
            pay_slips_last_month,
        })
    }

    async fn employees_by_department(&self, tenant_id: &str) -> Result<Vec<DepartmentCount>, AppError> {
        sqlx::query_as::<_, DepartmentCount>(
            "SELECT departement, COUNT(*) AS count FROM employees WHERE tenant_id = ? AND actif = 1 GROUP BY departement ORDER BY count DESC",
        )
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn employees_by_contract(&self, tenant_id: &str) -> Result<Vec<ContractCount>, AppError> {
        sqlx::query_as::<_, ContractCount>(
            "SELECT type_contrat, COUNT(*) AS count FROM employees WHERE tenant_id = ? AND actif = 1 GROUP BY type_contrat ORDER BY count DESC",
        )
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn recent_employees(&self, tenant_id: &str, limit: i64) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE tenant_id = ? AND actif = 1 ORDER BY created_at DESC LIMIT ?",
        )
            .bind(tenant_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn recent_promotions(&self, tenant_id: &str, limit: i64) -> Result<Vec<Promotion>, AppError> {
        sqlx::query_as::<_, Promotion>(
            "SELECT * FROM promotions WHERE tenant_id = ? ORDER BY created_at DESC LIMIT ?",
        )
            .bind(tenant_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_promotions(&self, tenant_id: &str) -> Result<i64, AppError> {
        self.scalar("SELECT COUNT(*) FROM promotions WHERE tenant_id = ?", tenant_id)
            .await
    }

    async fn count_demotions(&self, tenant_id: &str) -> Result<i64, AppError> {
        self.scalar("SELECT COUNT(*) FROM demotions WHERE tenant_id = ?", tenant_id)
            .await
    }

    async fn salary_evolution(&self, tenant_id: &str, limit: i64) -> Result<Vec<SalaryEvolutionPoint>, AppError> {
        sqlx::query_as::<_, SalaryEvolutionPoint>(
            "SELECT strftime('%Y-%m', date_vigueur) AS mois, CAST(SUM(montant_augmentation) AS INTEGER) AS total_augmentation FROM promotions WHERE tenant_id = ? AND statut = 'Appliquée' GROUP BY mois ORDER BY mois DESC LIMIT ?",
        )
            .bind(tenant_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn top_departments(&self, tenant_id: &str, limit: i64) -> Result<Vec<TopDepartment>, AppError> {
        sqlx::query_as::<_, TopDepartment>(
            "SELECT departement, COUNT(*) AS count, AVG(salaire) AS salaire_moyen FROM employees WHERE tenant_id = ? AND actif = 1 GROUP BY departement ORDER BY count DESC LIMIT ?",
        )
            .bind(tenant_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn attendance_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<EventTypeCount>, AppError> {
        sqlx::query_as::<_, EventTypeCount>(
            "SELECT type_evenement, COUNT(*) AS count FROM employee_trackings WHERE tenant_id = ? AND date_heure >= ? GROUP BY type_evenement ORDER BY count DESC",
        )
            .bind(tenant_id)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn department_stats(&self, tenant_id: &str) -> Result<Vec<DepartmentStat>, AppError> {
        sqlx::query_as::<_, DepartmentStat>(
            "SELECT departement, COUNT(*) AS total_employes, AVG(salaire) AS salaire_moyen, CAST(SUM(salaire) AS INTEGER) AS masse_salariale FROM employees WHERE tenant_id = ? AND actif = 1 GROUP BY departement ORDER BY total_employes DESC",
        )
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn salary_brackets(&self, tenant_id: &str) -> Result<Vec<SalaryBracket>, AppError> {
        sqlx::query_as::<_, SalaryBracket>(
            "SELECT CASE \
               WHEN salaire < 500000 THEN 'Moins de 500K' \
               WHEN salaire < 1000000 THEN '500K - 1M' \
               WHEN salaire < 1500000 THEN '1M - 1.5M' \
               WHEN salaire < 2000000 THEN '1.5M - 2M' \
               ELSE 'Plus de 2M' \
             END AS tranche_salaire, \
             COUNT(*) AS nombre_employes, \
             AVG(salaire) AS salaire_moyen \
             FROM employees WHERE tenant_id = ? AND actif = 1 \
             GROUP BY tranche_salaire ORDER BY MIN(salaire)",
        )
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
