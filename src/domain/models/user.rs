use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_DRH: &str = "DRH";
pub const ROLE_DG: &str = "DG";

pub fn is_valid_role(role: &str) -> bool {
    matches!(role, ROLE_ADMIN | ROLE_DRH | ROLE_DG)
}

/// Back-office account. `tenant_id` is None only for platform admins,
/// who administer tenants but own no business data themselves.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub tenant_id: Option<String>,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub actif: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        tenant_id: Option<String>,
        nom: String,
        prenom: String,
        email: String,
        role: String,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            nom,
            prenom,
            email,
            role,
            password_hash,
            actif: true,
            created_at: Utc::now(),
        }
    }
}
