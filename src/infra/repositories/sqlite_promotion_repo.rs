use crate::domain::{models::promotion::Promotion, ports::PromotionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePromotionRepo {
    pool: SqlitePool,
}

impl SqlitePromotionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionRepository for SqlitePromotionRepo {
    async fn create(&self, promotion: &Promotion) -> Result<Promotion, AppError> {
        sqlx::query_as::<_, Promotion>(
            "INSERT INTO promotions (id, tenant_id, user_id, employee_id, ancien_poste, nouveau_poste, ancien_salaire, nouveau_salaire, montant_augmentation, date_vigueur, statut, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&promotion.id)
            .bind(&promotion.tenant_id)
            .bind(&promotion.user_id)
            .bind(&promotion.employee_id)
            .bind(&promotion.ancien_poste)
            .bind(&promotion.nouveau_poste)
            .bind(promotion.ancien_salaire)
            .bind(promotion.nouveau_salaire)
            .bind(promotion.montant_augmentation)
            .bind(promotion.date_vigueur)
            .bind(promotion.statut)
            .bind(promotion.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Promotion>, AppError> {
        sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<Promotion>, AppError> {
        sqlx::query_as::<_, Promotion>(
            "SELECT * FROM promotions WHERE tenant_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
            .bind(tenant_id)
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, promotion: &Promotion) -> Result<Promotion, AppError> {
        sqlx::query_as::<_, Promotion>(
            "UPDATE promotions SET employee_id = ?, ancien_poste = ?, nouveau_poste = ?, ancien_salaire = ?, nouveau_salaire = ?, montant_augmentation = ?, date_vigueur = ? WHERE id = ? AND tenant_id = ? RETURNING *",
        )
            .bind(&promotion.employee_id)
            .bind(&promotion.ancien_poste)
            .bind(&promotion.nouveau_poste)
            .bind(promotion.ancien_salaire)
            .bind(promotion.nouveau_salaire)
            .bind(promotion.montant_augmentation)
            .bind(promotion.date_vigueur)
            .bind(&promotion.id)
            .bind(&promotion.tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn apply(&self, tenant_id: &str, id: &str) -> Result<Promotion, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // The statut predicate is the terminal-state guard: a promotion that
        // already left 'En attente' is not applied a second time.
        let applied = sqlx::query_as::<_, Promotion>(
            "UPDATE promotions SET statut = 'Appliquée' WHERE id = ? AND tenant_id = ? AND statut = 'En attente' RETURNING *",
        )
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let Some(applied) = applied else {
            let exists = sqlx::query("SELECT 1 FROM promotions WHERE id = ? AND tenant_id = ?")
                .bind(id)
                .bind(tenant_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::Database)?;
            return match exists {
                Some(_) => Err(AppError::Conflict("Promotion déjà appliquée ou annulée".into())),
                None => Err(AppError::NotFound("Promotion not found".into())),
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

    async fn cancel(&self, tenant_id: &str, id: &str) -> Result<Promotion, AppError> {
        let cancelled = sqlx::query_as::<_, Promotion>(
            "UPDATE promotions SET statut = 'Annulée' WHERE id = ? AND tenant_id = ? AND statut = 'En attente' RETURNING *",
        )
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match cancelled {
            Some(p) => Ok(p),
            None => {
                let exists = sqlx::query("SELECT 1 FROM promotions WHERE id = ? AND tenant_id = ?")
                    .bind(id)
                    .bind(tenant_id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(AppError::Database)?;
                match exists {
                    Some(_) => Err(AppError::Conflict("Promotion déjà appliquée ou annulée".into())),
                    None => Err(AppError::NotFound("Promotion not found".into())),
                }
            }
        }
    }

    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = ? AND tenant_id = ?")
            .bind(id)
            .bind(tenant_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Promotion not found".into()));
        }
        Ok(())
    }
}
