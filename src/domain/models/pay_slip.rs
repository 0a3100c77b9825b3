use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::statut::PaySlipStatut;
use crate::domain::services::payroll;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PaySlip {
    pub id: String,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub employee_id: String,
    pub mois: String,
    pub annee: i64,
    pub salaire_brut: i64,
    pub cotisations: i64,
    pub salaire_net: i64,
    pub statut: PaySlipStatut,
    pub created_at: DateTime<Utc>,
}

impl PaySlip {
    /// Builds a slip for a period from the employee's current gross salary.
    /// Contributions and net pay are always derived here, never supplied.
    pub fn generate(
        tenant_id: String,
        user_id: String,
        employee_id: String,
        mois: String,
        annee: i64,
        salaire_brut: i64,
    ) -> Self {
        let cotisations = payroll::cotisations(salaire_brut);

        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            user_id: Some(user_id),
            employee_id,
            mois,
            annee,
            salaire_brut,
            cotisations,
            salaire_net: salaire_brut - cotisations,
            statut: PaySlipStatut::Generee,
            created_at: Utc::now(),
        }
    }
}
