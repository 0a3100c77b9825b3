use crate::domain::{models::demotion::Demotion, ports::DemotionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteDemotionRepo {
    pool: SqlitePool,
}

impl SqliteDemotionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DemotionRepository for SqliteDemotionRepo {
    async fn create(&self, demotion: &Demotion) -> Result<Demotion, AppError> {
        sqlx::query_as::<_, Demotion>(
            "INSERT INTO demotions (id, tenant_id, user_id, employee_id, ancien_poste, nouveau_poste, ancien_salaire, nouveau_salaire, montant_reduction, motif_demotion, date_vigueur, statut, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&demotion.id)
            .bind(&demotion.tenant_id)
            .bind(&demotion.user_id)
            .bind(&demotion.employee_id)
            .bind(&demotion.ancien_poste)
            .bind(&demotion.nouveau_poste)
            .bind(demotion.ancien_salaire)
            .bind(demotion.nouveau_salaire)
            .bind(demotion.montant_reduction)
            .bind(&demotion.motif_demotion)
            .bind(demotion.date_vigueur)
            .bind(demotion.statut)
            .bind(demotion.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Demotion>, AppError> {
        sqlx::query_as::<_, Demotion>("SELECT * FROM demotions WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<Demotion>, AppError> {
        sqlx::query_as::<_, Demotion>(
            "SELECT * FROM demotions WHERE tenant_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
            .bind(tenant_id)
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, demotion: &Demotion) -> Result<Demotion, AppError> {
        sqlx::query_as::<_, Demotion>(
            "UPDATE demotions SET employee_id = ?, ancien_poste = ?, nouveau_poste = ?, ancien_salaire = ?, nouveau_salaire = ?, montant_reduction = ?, motif_demotion = ?, date_vigueur = ? WHERE id = ? AND tenant_id = ? RETURNING *",
        )
            .bind(&demotion.employee_id)
            .bind(&demotion.ancien_poste)
            .bind(&demotion.nouveau_poste)
            .bind(demotion.ancien_salaire)
            .bind(demotion.nouveau_salaire)
            .bind(demotion.montant_reduction)
            .bind(&demotion.motif_demotion)
            .bind(demotion.date_vigueur)
            .bind(&demotion.id)
            .bind(&demotion.tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn apply(&self, tenant_id: &str, id: &str) -> Result<Demotion, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let applied = sqlx::query_as::<_, Demotion>(
            "UPDATE demotions SET statut = 'Appliquée' WHERE id = ? AND tenant_id = ? AND statut = 'En attente' RETURNING *",
        )
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let Some(applied) = applied else {
            let exists = sqlx::query("SELECT 1 FROM demotions WHERE id = ? AND tenant_id = ?")
                .bind(id)
                .bind(tenant_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::Database)?;
            return match exists {
                Some(_) => Err(AppError::Conflict("Démotion déjà appliquée ou annulée".into())),
                None => Err(AppError::NotFound("Demotion not found".into())),
            };
        };

        sqlx::query("UPDATE employees SET poste = ?, salaire = ? WHERE id = ? AND tenant_id = ?")
            .bind(&applied.nouveau_poste)
            .bind(applied.nouveau_salaire)
            .bind(&applied.employee_id)
            .bind(tenant_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(applied)
    }

    async fn cancel(&self, tenant_id: &str, id: &str) -> Result<Demotion, AppError> {
        let cancelled = sqlx::query_as::<_, Demotion>(
            "UPDATE demotions SET statut = 'Annulée' WHERE id = ? AND tenant_id = ? AND statut = 'En attente' RETURNING *",
        )
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match cancelled {
            Some(d) => Ok(d),
            None => {
                let exists = sqlx::query("SELECT 1 FROM demotions WHERE id = ? AND tenant_id = ?")
                    .bind(id)
                    .bind(tenant_id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(AppError::Database)?;
                match exists {
                    Some(_) => Err(AppError::Conflict("Démotion déjà appliquée ou annulée".into())),
                    None => Err(AppError::NotFound("Demotion not found".into())),
                }
            }
        }
    }

    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM demotions WHERE id = ? AND tenant_id = ?")
            .bind(id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Demotion not found".into()));
        }
        Ok(())
    }
}
