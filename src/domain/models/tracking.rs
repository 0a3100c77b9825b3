use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const EVENT_ARRIVEE: &str = "Arrivée";
pub const EVENT_CONGE: &str = "Congé";
pub const EVENT_MALADIE: &str = "Maladie";

/// Attendance / event log entry for an employee.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EmployeeTracking {
    pub id: String,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub employee_id: String,
    pub type_evenement: String,
    pub date_heure: DateTime<Utc>,
    pub lieu: Option<String>,
    pub commentaire: Option<String>,
    pub statut: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewTrackingParams {
    pub tenant_id: String,
    pub user_id: String,
    pub employee_id: String,
    pub type_evenement: String,
    pub date_heure: DateTime<Utc>,
    pub lieu: Option<String>,
    pub commentaire: Option<String>,
}

impl EmployeeTracking {
    pub fn new(params: NewTrackingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            user_id: Some(params.user_id),
            employee_id: params.employee_id,
            type_evenement: params.type_evenement,
            date_heure: params.date_heure,
            lieu: params.lieu,
            commentaire: params.commentaire,
            statut: None,
            created_at: Utc::now(),
        }
    }
}
