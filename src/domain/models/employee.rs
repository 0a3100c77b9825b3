use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Months, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Employee {
    pub id: String,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: NaiveDate,
    pub contact: String,
    pub adresse: String,
    pub poste: String,
    pub departement: String,
    pub date_prise_fonction: NaiveDate,
    pub salaire: i64,
    pub type_contrat: String,
    pub duree_contrat: i64,
    pub date_fin_contrat: Option<NaiveDate>,
    pub actif: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewEmployeeParams {
    pub tenant_id: String,
    pub user_id: String,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: NaiveDate,
    pub contact: String,
    pub adresse: String,
    pub poste: String,
    pub departement: String,
    pub date_prise_fonction: NaiveDate,
    pub salaire: i64,
    pub type_contrat: String,
    pub duree_contrat: i64,
}

impl Employee {
    pub fn new(params: NewEmployeeParams) -> Self {
        let date_fin_contrat = contract_end_date(
            &params.type_contrat,
            params.duree_contrat,
            params.date_prise_fonction,
        );

        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            user_id: Some(params.user_id),
            nom: params.nom,
            prenom: params.prenom,
            date_naissance: params.date_naissance,
            contact: params.contact,
            adresse: params.adresse,
            poste: params.poste,
            departement: params.departement,
            date_prise_fonction: params.date_prise_fonction,
            salaire: params.salaire,
            type_contrat: params.type_contrat,
            duree_contrat: params.duree_contrat,
            date_fin_contrat,
            actif: true,
            created_at: Utc::now(),
        }
    }
}

/// Fixed-term contracts end `duree_contrat` months after the start date;
/// a CDI has no end date.
pub fn contract_end_date(type_contrat: &str, duree_contrat: i64, start: NaiveDate) -> Option<NaiveDate> {
    if type_contrat == "CDI" || duree_contrat <= 0 {
        return None;
    }
    start.checked_add_months(Months::new(duree_contrat as u32))
}
