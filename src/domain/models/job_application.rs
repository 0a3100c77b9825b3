use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::statut::ApplicationStatut;

/// Candidate submission against an offer. File fields hold opaque storage
/// keys, never public URLs; `tenant_id` is inherited from the offer and may
/// be None for legacy unscoped offers.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct JobApplication {
    pub id: String,
    pub tenant_id: Option<String>,
    pub user_id: Option<String>,
    pub job_offer_id: String,
    pub nom_complet: String,
    pub email_professionnel: String,
    pub telephone: String,
    pub motivation: Option<String>,
    pub cv_key: Option<String>,
    pub lettre_key: Option<String>,
    pub diplome_key: Option<String>,
    pub statut: ApplicationStatut,
    pub created_at: DateTime<Utc>,
}

pub struct NewApplicationParams {
    pub tenant_id: Option<String>,
    pub job_offer_id: String,
    pub nom_complet: String,
    pub email_professionnel: String,
    pub telephone: String,
    pub motivation: Option<String>,
    pub cv_key: Option<String>,
    pub lettre_key: Option<String>,
    pub diplome_key: Option<String>,
}

impl JobApplication {
    pub fn new(params: NewApplicationParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            user_id: None,
            job_offer_id: params.job_offer_id,
            nom_complet: params.nom_complet,
            email_professionnel: params.email_professionnel,
            telephone: params.telephone,
            motivation: params.motivation,
            cv_key: params.cv_key,
            lettre_key: params.lettre_key,
            diplome_key: params.diplome_key,
            statut: ApplicationStatut::EnAttente,
            created_at: Utc::now(),
        }
    }
}
