use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{
    CreateJobOfferRequest, PageQuery, UpdateApplicationStatutRequest, UpdateJobOfferRequest,
};
use crate::api::dtos::responses::{FileUrlResponse, JobOfferDetail, Paginated};
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::job_offer::{JobOffer, NewJobOfferParams};
use crate::domain::models::statut::{ApplicationStatut, OfferStatut};
use crate::domain::services::transitions;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

/// Expires the offer in place when its closing date has passed, persisting
/// the change. Every admin read path funnels through here.
async fn refresh(state: &AppState, offer: &mut JobOffer) -> Result<(), AppError> {
    let today = Utc::now().date_naive();
    if transitions::refresh_offer(offer, today) {
        state.job_offer_repo.save_statut(&offer.id, offer.statut).await?;
    }
    Ok(())
}

pub async fn create_job_offer(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreateJobOfferRequest>,
) -> Result<impl IntoResponse, AppError> {
    let statut = match payload.statut.as_deref() {
        Some(label) => label.parse::<OfferStatut>()?,
        None => OfferStatut::NonPubliee,
    };

    let offer = JobOffer::new(NewJobOfferParams {
        tenant_id: ctx.tenant_id.clone(),
        user_id: ctx.user_id.clone(),
        intitule: payload.intitule,
        poste: payload.poste,
        departement: payload.departement,
        type_contrat: payload.type_contrat,
        competences_requises: payload.competences_requises,
        date_cloture: payload.date_cloture,
        statut,
        description: payload.description,
        salaire: payload.salaire,
        experience: payload.experience,
    });

    let created = state.job_offer_repo.create(&offer).await?;
    info!("Job offer created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_job_offers(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let mut offers = state.job_offer_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;

    for offer in offers.iter_mut() {
        refresh(&state, offer).await?;
    }

    Ok(Json(Paginated::new(offers, page, PER_PAGE)))
}

pub async fn get_job_offer(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut offer = state
        .job_offer_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Job offer not found".into()))?;

    refresh(&state, &mut offer).await?;
    let nombre_candidatures = state.job_offer_repo.count_applications(&offer.id).await?;

    Ok(Json(JobOfferDetail { offer, nombre_candidatures }))
}

pub async fn update_job_offer(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdateJobOfferRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut offer = state
        .job_offer_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Job offer not found".into()))?;

    if let Some(intitule) = payload.intitule {
        offer.intitule = intitule;
    }
    if let Some(poste) = payload.poste {
        offer.poste = poste;
    }
    if let Some(departement) = payload.departement {
        offer.departement = departement;
    }
    if let Some(type_contrat) = payload.type_contrat {
        offer.type_contrat = type_contrat;
    }
    if let Some(competences) = payload.competences_requises {
        offer.competences_requises = competences;
    }
    if let Some(date_cloture) = payload.date_cloture {
        offer.date_cloture = date_cloture;
    }
    if let Some(label) = payload.statut {
        offer.statut = label.parse::<OfferStatut>()?;
    }
    if let Some(description) = payload.description {
        offer.description = Some(description);
    }
    if let Some(salaire) = payload.salaire {
        offer.salaire = Some(salaire);
    }
    if let Some(experience) = payload.experience {
        offer.experience = Some(experience);
    }

    let updated = state.job_offer_repo.update(&offer).await?;
    info!("Job offer updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_job_offer(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.job_offer_repo.delete(&ctx.tenant_id, &id).await?;
    info!("Job offer deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .job_offer_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Job offer not found".into()))?;

    let applications = state.job_application_repo.list_by_offer(&ctx.tenant_id, &id).await?;
    Ok(Json(applications))
}

pub async fn update_application_statut(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path((_offer_id, application_id)): Path<(String, String)>,
    Json(payload): Json<UpdateApplicationStatutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let statut = payload.statut.parse::<ApplicationStatut>()?;

    let updated = state
        .job_application_repo
        .set_statut(&ctx.tenant_id, &application_id, statut)
        .await?;
    info!("Application {} statut: {}", application_id, payload.statut);
    Ok(Json(updated))
}

/// Resolves a stored document of an application. `kind` is one of
/// cv / lettre / diplome.
pub async fn application_file_url(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path((_offer_id, application_id, kind)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let application = state
        .job_application_repo
        .find_by_id(&ctx.tenant_id, &application_id)
        .await?
        .ok_or(AppError::NotFound("Application not found".into()))?;

    let key = match kind.as_str() {
        "cv" => application.cv_key,
        "lettre" => application.lettre_key,
        "diplome" => application.diplome_key,
        other => return Err(AppError::Validation(format!("Type de document invalide: {other}"))),
    }
    .ok_or(AppError::NotFound("Document not found".into()))?;

    let url = state.storage.url(&key).await?;
    Ok(Json(FileUrlResponse { url }))
}
