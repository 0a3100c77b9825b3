use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A country instance. Owns every other business record by foreign key.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(skip_serializing)]
    pub access_code: String,
    pub ceo_name: String,
    pub actif: bool,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(name: String, country: String, access_code: String, ceo_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            country,
            access_code,
            ceo_name,
            actif: true,
            created_at: Utc::now(),
        }
    }
}
