use crate::domain::{models::employee::Employee, ports::EmployeeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEmployeeRepo {
    pool: SqlitePool,
}

impl SqliteEmployeeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepo {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (id, tenant_id, user_id, nom, prenom, date_naissance, contact, adresse, poste, departement, date_prise_fonction, salaire, type_contrat, duree_contrat, date_fin_contrat, actif, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&employee.id)
            .bind(&employee.tenant_id)
            .bind(&employee.user_id)
            .bind(&employee.nom)
            .bind(&employee.prenom)
            .bind(employee.date_naissance)
            .bind(&employee.contact)
            .bind(&employee.adresse)
            .bind(&employee.poste)
            .bind(&employee.departement)
            .bind(employee.date_prise_fonction)
            .bind(employee.salaire)
            .bind(&employee.type_contrat)
            .bind(employee.duree_contrat)
            .bind(employee.date_fin_contrat)
            .bind(employee.actif)
            .bind(employee.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE tenant_id = ? AND actif = 1 ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
            .bind(tenant_id)
            .bind(per_page)
            .bind((page - 1) * per_page)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self, tenant_id: &str) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE tenant_id = ? AND actif = 1 ORDER BY nom ASC",
        )
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET nom = ?, prenom = ?, date_naissance = ?, contact = ?, adresse = ?, poste = ?, departement = ?, date_prise_fonction = ?, salaire = ?, type_contrat = ?, duree_contrat = ?, date_fin_contrat = ? WHERE id = ? AND tenant_id = ? RETURNING *",
        )
            .bind(&employee.nom)
            .bind(&employee.prenom)
            .bind(employee.date_naissance)
            .bind(&employee.contact)
            .bind(&employee.adresse)
            .bind(&employee.poste)
            .bind(&employee.departement)
            .bind(employee.date_prise_fonction)
            .bind(employee.salaire)
            .bind(&employee.type_contrat)
            .bind(employee.duree_contrat)
            .bind(employee.date_fin_contrat)
            .bind(&employee.id)
            .bind(&employee.tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn soft_delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE employees SET actif = 0 WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employee not found".into()));
        }
        Ok(())
    }
}
