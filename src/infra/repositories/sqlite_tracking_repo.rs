use crate::domain::models::reports::EventTypeCount;
use crate::domain::{models::tracking::EmployeeTracking, ports::TrackingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

pub struct SqliteTrackingRepo {
    pool: SqlitePool,
}

impl SqliteTrackingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackingRepository for SqliteTrackingRepo {
    async fn create(&self, tracking: &EmployeeTracking) -> Result<EmployeeTracking, AppError> {
        sqlx::query_as::<_, EmployeeTracking>(
            "INSERT INTO employee_trackings (id, tenant_id, user_id, employee_id, type_evenement, date_heure, lieu, commentaire, statut, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&tracking.id)
            .bind(&tracking.tenant_id)
            .bind(&tracking.user_id)
            .bind(&tracking.employee_id)
            .bind(&tracking.type_evenement)
            .bind(tracking.date_heure)
            .bind(&tracking.lieu)
            .bind(&tracking.commentaire)
            .bind(&tracking.statut)
            .bind(tracking.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<EmployeeTracking>, AppError> {
        sqlx::query_as::<_, EmployeeTracking>(
            "SELECT * FROM employee_trackings WHERE tenant_id = ? AND id = ?",
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
        date: Option<NaiveDate>,
        employee_id: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<EmployeeTracking>, AppError> {
        // Canonical order for the event log is event time, not insertion time.
        let mut sql = String::from("SELECT * FROM employee_trackings WHERE tenant_id = ?");
        if date.is_some() {
            sql.push_str(" AND DATE(date_heure) = ?");
        }
        if employee_id.is_some() {
            sql.push_str(" AND employee_id = ?");
        }
        sql.push_str(" ORDER BY date_heure DESC LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, EmployeeTracking>(&sql).bind(tenant_id);
        if let Some(d) = date {
            query = query.bind(d.format("%Y-%m-%d").to_string());
        }
        if let Some(e) = employee_id {
            query = query.bind(e.to_string());
        }

        query
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, tracking: &EmployeeTracking) -> Result<EmployeeTracking, AppError> {
        sqlx::query_as::<_, EmployeeTracking>(
            "UPDATE employee_trackings SET employee_id = ?, type_evenement = ?, date_heure = ?, lieu = ?, commentaire = ?, statut = ? WHERE id = ? AND tenant_id = ? RETURNING *",
        )
            .bind(&tracking.employee_id)
            .bind(&tracking.type_evenement)
            .bind(tracking.date_heure)
            .bind(&tracking.lieu)
            .bind(&tracking.commentaire)
            .bind(&tracking.statut)
            .bind(&tracking.id)
            .bind(&tracking.tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employee_trackings WHERE id = ? AND tenant_id = ?")
            .bind(id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tracking entry not found".into()));
        }
        Ok(())
    }

    async fn list_by_day_and_types(
        &self,
        tenant_id: &str,
        day: NaiveDate,
        types: &[&str],
    ) -> Result<Vec<EmployeeTracking>, AppError> {
        let placeholders = vec!["?"; types.len()].join(", ");
        let sql = format!(
            "SELECT * FROM employee_trackings WHERE tenant_id = ? AND DATE(date_heure) = ? AND type_evenement IN ({placeholders}) ORDER BY date_heure DESC",
        );

        let mut query = sqlx::query_as::<_, EmployeeTracking>(&sql)
            .bind(tenant_id)
            .bind(day.format("%Y-%m-%d").to_string());
        for t in types {
            query = query.bind(t.to_string());
        }

        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn count_by_type_between(
        &self,
        tenant_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<EventTypeCount>, AppError> {
        sqlx::query_as::<_, EventTypeCount>(
            "SELECT type_evenement, COUNT(*) AS count FROM employee_trackings WHERE tenant_id = ? AND date_heure >= ? AND date_heure <= ? GROUP BY type_evenement",
        )
            .bind(tenant_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
