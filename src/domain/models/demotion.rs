use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::statut::TransitionStatut;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Demotion {
    pub id: String,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub employee_id: String,
    pub ancien_poste: String,
    pub nouveau_poste: String,
    pub ancien_salaire: i64,
    pub nouveau_salaire: i64,
    pub montant_reduction: i64,
    pub motif_demotion: String,
    pub date_vigueur: NaiveDate,
    pub statut: TransitionStatut,
    pub created_at: DateTime<Utc>,
}

pub struct NewDemotionParams {
    pub tenant_id: String,
    pub user_id: String,
    pub employee_id: String,
    pub ancien_poste: String,
    pub nouveau_poste: String,
    pub ancien_salaire: i64,
    pub nouveau_salaire: i64,
    pub motif_demotion: String,
    pub date_vigueur: NaiveDate,
}

impl Demotion {
    pub fn new(params: NewDemotionParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            user_id: Some(params.user_id),
            employee_id: params.employee_id,
            ancien_poste: params.ancien_poste,
            nouveau_poste: params.nouveau_poste,
            ancien_salaire: params.ancien_salaire,
            nouveau_salaire: params.nouveau_salaire,
            // Never trusted from input.
            montant_reduction: params.ancien_salaire - params.nouveau_salaire,
            motif_demotion: params.motif_demotion,
            date_vigueur: params.date_vigueur,
            statut: TransitionStatut::EnAttente,
            created_at: Utc::now(),
        }
    }
}
