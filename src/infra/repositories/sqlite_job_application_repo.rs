use crate::domain::models::statut::ApplicationStatut;
use crate::domain::{models::job_application::JobApplication, ports::JobApplicationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteJobApplicationRepo {
    pool: SqlitePool,
}

impl SqliteJobApplicationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Admin reads join through job_offers: the offer's tenant owns the
// application even when the application row itself predates tenant scoping
// and carries a NULL tenant_id.
#[async_trait]
impl JobApplicationRepository for SqliteJobApplicationRepo {
    async fn create(&self, application: &JobApplication) -> Result<JobApplication, AppError> {
        sqlx::query_as::<_, JobApplication>(
            "INSERT INTO job_applications (id, tenant_id, user_id, job_offer_id, nom_complet, email_professionnel, telephone, motivation, cv_key, lettre_key, diplome_key, statut, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&application.id)
            .bind(&application.tenant_id)
            .bind(&application.user_id)
            .bind(&application.job_offer_id)
            .bind(&application.nom_complet)
            .bind(&application.email_professionnel)
            .bind(&application.telephone)
            .bind(&application.motivation)
            .bind(&application.cv_key)
            .bind(&application.lettre_key)
            .bind(&application.diplome_key)
            .bind(application.statut)
            .bind(application.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<JobApplication>, AppError> {
        sqlx::query_as::<_, JobApplication>(
            "SELECT a.* FROM job_applications a JOIN job_offers o ON o.id = a.job_offer_id WHERE a.id = ? AND o.tenant_id = ?",
        )
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_offer(&self, tenant_id: &str, offer_id: &str) -> Result<Vec<JobApplication>, AppError> {
        sqlx::query_as::<_, JobApplication>(
            "SELECT a.* FROM job_applications a JOIN job_offers o ON o.id = a.job_offer_id WHERE a.job_offer_id = ? AND o.tenant_id = ? ORDER BY a.created_at DESC",
        )
            .bind(offer_id)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn exists_for(&self, offer_id: &str, email: &str) -> Result<bool, AppError> {
        let row = sqlx::query(
            "SELECT 1 FROM job_applications WHERE job_offer_id = ? AND email_professionnel = ?",
        )
            .bind(offer_id)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.is_some())
    }

    async fn set_statut(
        &self,
        tenant_id: &str,
        id: &str,
        statut: ApplicationStatut,
    ) -> Result<JobApplication, AppError> {
        sqlx::query_as::<_, JobApplication>(
            "UPDATE job_applications SET statut = ? WHERE id = ? AND job_offer_id IN (SELECT id FROM job_offers WHERE tenant_id = ?) RETURNING *",
        )
            .bind(statut)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Application not found".into()))
    }
}
