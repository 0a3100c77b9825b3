use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::statut::OfferStatut;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct JobOffer {
    pub id: String,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub intitule: String,
    pub poste: String,
    pub departement: String,
    pub type_contrat: String,
    pub competences_requises: String,
    pub date_cloture: NaiveDate,
    pub statut: OfferStatut,
    pub description: Option<String>,
    pub salaire: Option<i64>,
    pub experience: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewJobOfferParams {
    pub tenant_id: String,
    pub user_id: String,
    pub intitule: String,
    pub poste: String,
    pub departement: String,
    pub type_contrat: String,
    pub competences_requises: String,
    pub date_cloture: NaiveDate,
    pub statut: OfferStatut,
    pub description: Option<String>,
    pub salaire: Option<i64>,
    pub experience: Option<String>,
}

impl JobOffer {
    pub fn new(params: NewJobOfferParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            user_id: Some(params.user_id),
            intitule: params.intitule,
            poste: params.poste,
            departement: params.departement,
            type_contrat: params.type_contrat,
            competences_requises: params.competences_requises,
            date_cloture: params.date_cloture,
            statut: params.statut,
            description: params.description,
            salaire: params.salaire,
            experience: params.experience,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.date_cloture < today
    }

    /// An offer is open to candidates only while published and unexpired.
    pub fn is_open(&self, today: NaiveDate) -> bool {
        self.statut == OfferStatut::Publiee && !self.is_expired(today)
    }
}
