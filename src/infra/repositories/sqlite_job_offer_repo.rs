use crate::domain::models::statut::OfferStatut;
use crate::domain::{models::job_offer::JobOffer, ports::JobOfferRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteJobOfferRepo {
    pool: SqlitePool,
}

impl SqliteJobOfferRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobOfferRepository for SqliteJobOfferRepo {
    async fn create(&self, offer: &JobOffer) -> Result<JobOffer, AppError> {
        sqlx::query_as::<_, JobOffer>(
            "INSERT INTO job_offers (id, tenant_id, user_id, intitule, poste, departement, type_contrat, competences_requises, date_cloture, statut, description, salaire, experience, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&offer.id)
            .bind(&offer.tenant_id)
            .bind(&offer.user_id)
            .bind(&offer.intitule)
            .bind(&offer.poste)
            .bind(&offer.departement)
            .bind(&offer.type_contrat)
            .bind(&offer.competences_requises)
            .bind(offer.date_cloture)
            .bind(offer.statut)
            .bind(&offer.description)
            .bind(offer.salaire)
            .bind(&offer.experience)
            .bind(offer.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<JobOffer>, AppError> {
        sqlx::query_as::<_, JobOffer>("SELECT * FROM job_offers WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<JobOffer>, AppError> {
        sqlx::query_as::<_, JobOffer>(
            "SELECT * FROM job_offers WHERE tenant_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
            .bind(tenant_id)
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, offer: &JobOffer) -> Result<JobOffer, AppError> {
        sqlx::query_as::<_, JobOffer>(
            "UPDATE job_offers SET intitule = ?, poste = ?, departement = ?, type_contrat = ?, competences_requises = ?, date_cloture = ?, statut = ?, description = ?, salaire = ?, experience = ? WHERE id = ? AND tenant_id = ? RETURNING *",
        )
            .bind(&offer.intitule)
            .bind(&offer.poste)
            .bind(&offer.departement)
            .bind(&offer.type_contrat)
            .bind(&offer.competences_requises)
            .bind(offer.date_cloture)
            .bind(offer.statut)
            .bind(&offer.description)
            .bind(offer.salaire)
            .bind(&offer.experience)
            .bind(&offer.id)
            .bind(&offer.tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM job_offers WHERE id = ? AND tenant_id = ?")
            .bind(id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Job offer not found".into()));
        }
        Ok(())
    }

    async fn save_statut(&self, id: &str, statut: OfferStatut) -> Result<(), AppError> {
        sqlx::query("UPDATE job_offers SET statut = ? WHERE id = ?")
            .bind(statut)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn count_applications(&self, offer_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM job_applications WHERE job_offer_id = ?")
            .bind(offer_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("total"))
    }

    async fn list_published(&self) -> Result<Vec<JobOffer>, AppError> {
        sqlx::query_as::<_, JobOffer>(
            "SELECT * FROM job_offers WHERE statut = 'Publiée' ORDER BY created_at DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_public(&self, id: &str) -> Result<Option<JobOffer>, AppError> {
        sqlx::query_as::<_, JobOffer>("SELECT * FROM job_offers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
