use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Catalog entry for a job title within a tenant.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Post {
    pub id: String,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub intitule: String,
    pub departement: String,
    pub description: Option<String>,
    pub montant_augmentation: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        tenant_id: String,
        user_id: String,
        intitule: String,
        departement: String,
        description: Option<String>,
        montant_augmentation: Option<i64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            user_id: Some(user_id),
            intitule,
            departement,
            description,
            montant_augmentation,
            created_at: Utc::now(),
        }
    }
}
