use crate::domain::models::org_chart::OrgNode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

// Tenant and actor identity never come from these payloads; both are stamped
// from the authenticated principal. Computed amounts (montant, cotisations)
// are not deserialized either.

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

#[derive(Deserialize)]
pub struct AccessCodeRequest {
    pub access_code: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateTenantRequest {
    pub name: String,
    pub country: String,
    pub access_code: String,
    pub ceo_name: String,
}

#[derive(Deserialize)]
pub struct UpdateTenantRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    pub access_code: Option<String>,
    pub ceo_name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
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

#[derive(Deserialize)]
pub struct UpdateEmployeeRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub contact: Option<String>,
    pub adresse: Option<String>,
    pub poste: Option<String>,
    pub departement: Option<String>,
    pub date_prise_fonction: Option<NaiveDate>,
    pub salaire: Option<i64>,
    pub type_contrat: Option<String>,
    pub duree_contrat: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreatePromotionRequest {
    pub employee_id: String,
    pub nouveau_poste: String,
    pub nouveau_salaire: i64,
    pub date_vigueur: NaiveDate,
}

#[derive(Deserialize)]
pub struct UpdatePromotionRequest {
    pub nouveau_poste: Option<String>,
    pub nouveau_salaire: Option<i64>,
    pub date_vigueur: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct CreateDemotionRequest {
    pub employee_id: String,
    pub nouveau_poste: String,
    pub nouveau_salaire: i64,
    pub motif_demotion: String,
    pub date_vigueur: NaiveDate,
}

#[derive(Deserialize)]
pub struct UpdateDemotionRequest {
    pub nouveau_poste: Option<String>,
    pub nouveau_salaire: Option<i64>,
    pub motif_demotion: Option<String>,
    pub date_vigueur: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub intitule: String,
    pub departement: String,
    pub description: Option<String>,
    pub montant_augmentation: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdatePostRequest {
    pub intitule: Option<String>,
    pub departement: Option<String>,
    pub description: Option<String>,
    pub montant_augmentation: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreatePaySlipRequest {
    pub employee_id: String,
    pub mois: String,
    pub annee: i64,
}

#[derive(Deserialize)]
pub struct GenerateAllPaySlipsRequest {
    pub mois: String,
    pub annee: i64,
}

#[derive(Deserialize)]
pub struct CreateTrackingRequest {
    pub employee_id: String,
    pub type_evenement: String,
    pub date_heure: DateTime<Utc>,
    pub lieu: Option<String>,
    pub commentaire: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTrackingRequest {
    pub employee_id: Option<String>,
    pub type_evenement: Option<String>,
    pub date_heure: Option<DateTime<Utc>>,
    pub lieu: Option<String>,
    pub commentaire: Option<String>,
    pub statut: Option<String>,
}

#[derive(Deserialize)]
pub struct TrackingListQuery {
    pub page: Option<i64>,
    pub date: Option<NaiveDate>,
    pub employee_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateJobOfferRequest {
    pub intitule: String,
    pub poste: String,
    pub departement: String,
    pub type_contrat: String,
    pub competences_requises: String,
    pub date_cloture: NaiveDate,
    pub statut: Option<String>,
    pub description: Option<String>,
    pub salaire: Option<i64>,
    pub experience: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateJobOfferRequest {
    pub intitule: Option<String>,
    pub poste: Option<String>,
    pub departement: Option<String>,
    pub type_contrat: Option<String>,
    pub competences_requises: Option<String>,
    pub date_cloture: Option<NaiveDate>,
    pub statut: Option<String>,
    pub description: Option<String>,
    pub salaire: Option<i64>,
    pub experience: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateApplicationStatutRequest {
    pub statut: String,
}

#[derive(Deserialize)]
pub struct CreateOrgChartRequest {
    pub nom: String,
    pub description: Option<String>,
    pub structure: OrgNode,
}

#[derive(Deserialize)]
pub struct UpdateOrgChartRequest {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub structure: Option<OrgNode>,
    pub actif: Option<bool>,
}

#[derive(Deserialize)]
pub struct GenerateOrgChartRequest {
    pub nom: Option<String>,
}
