use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::responses::JobOfferDetail;
use crate::domain::models::job_application::{JobApplication, NewApplicationParams};
use crate::domain::models::job_offer::JobOffer;
use crate::domain::ports::StoredFile;
use crate::domain::services::transitions;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

const MAX_FILE_BYTES: usize = 3 * 1024 * 1024;
const DOCUMENT_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];
const DIPLOMA_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

async fn refresh(state: &AppState, offer: &mut JobOffer) -> Result<(), AppError> {
    let today = Utc::now().date_naive();
    if transitions::refresh_offer(offer, today) {
        state.job_offer_repo.save_statut(&offer.id, offer.statut).await?;
    }
    Ok(())
}

/// Public job board: published, unexpired offers across all tenants.
/// Stale rows are flipped and persisted here like on every other read path.
pub async fn list_public_offers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let mut offers = state.job_offer_repo.list_published().await?;
    for offer in offers.iter_mut() {
        refresh(&state, offer).await?;
    }
    offers.retain(|offer| offer.is_open(today));
    Ok(Json(offers))
}

pub async fn get_public_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut offer = state
        .job_offer_repo
        .find_public(&id)
        .await?
        .ok_or(AppError::NotFound("Job offer not found".into()))?;

    refresh(&state, &mut offer).await?;

    let today = Utc::now().date_naive();
    if !offer.is_open(today) {
        return Err(AppError::NotFound("Job offer not found".into()));
    }

    let nombre_candidatures = state.job_offer_repo.count_applications(&offer.id).await?;
    Ok(Json(JobOfferDetail { offer, nombre_candidatures }))
}

struct UploadedFile {
    bytes: Vec<u8>,
    extension: String,
    content_type: Option<String>,
}

fn extension_of(filename: &str) -> Result<String, AppError> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or_else(|| AppError::Validation("Le fichier doit avoir une extension".into()))
}

fn check_file(file: &UploadedFile, allowed: &[&str], label: &str) -> Result<(), AppError> {
    if !allowed.contains(&file.extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Format de fichier invalide pour {label}: .{} (attendu: {})",
            file.extension,
            allowed.join(", ")
        )));
    }
    if file.bytes.len() > MAX_FILE_BYTES {
        return Err(AppError::Validation(format!("{label}: fichier trop volumineux (max 3 Mo)")));
    }
    if file.bytes.is_empty() {
        return Err(AppError::Validation(format!("{label}: fichier vide")));
    }
    Ok(())
}

async fn store(
    state: &AppState,
    file: &UploadedFile,
    prefix: &str,
) -> Result<StoredFile, AppError> {
    state
        .storage
        .save(&file.bytes, prefix, &file.extension, file.content_type.as_deref())
        .await
}

pub async fn apply_to_offer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut offer = state
        .job_offer_repo
        .find_public(&id)
        .await?
        .ok_or(AppError::NotFound("Job offer not found".into()))?;

    refresh(&state, &mut offer).await?;

    let today = Utc::now().date_naive();
    if !offer.is_open(today) {
        return Err(AppError::Conflict("Cette offre n'accepte plus de candidatures".into()));
    }

    let mut nom_complet = None;
    let mut email_professionnel = None;
    let mut telephone = None;
    let mut motivation = None;
    let mut cv = None;
    let mut lettre = None;
    let mut diplome = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Formulaire multipart invalide".into()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "nom_complet" | "email_professionnel" | "telephone" | "motivation" => {
                let value = field
                    .text()
                    .await
                    .map_err(|_| AppError::Validation(format!("Champ invalide: {name}")))?;
                match name.as_str() {
                    "nom_complet" => nom_complet = Some(value),
                    "email_professionnel" => email_professionnel = Some(value),
                    "telephone" => telephone = Some(value),
                    _ => motivation = Some(value),
                }
            }
            "cv" | "lettre_motivation" | "diplome" => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::Validation(format!("{name}: nom de fichier manquant")))?
                    .to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::Validation(format!("{name}: lecture du fichier échouée")))?;

                let file = UploadedFile {
                    bytes: bytes.to_vec(),
                    extension: extension_of(&filename)?,
                    content_type,
                };
                match name.as_str() {
                    "cv" => cv = Some(file),
                    "lettre_motivation" => lettre = Some(file),
                    _ => diplome = Some(file),
                }
            }
            _ => {}
        }
    }

    let nom_complet =
        nom_complet.filter(|v| !v.trim().is_empty()).ok_or(AppError::Validation("Le nom complet est requis".into()))?;
    let email_professionnel = email_professionnel
        .filter(|v| v.contains('@'))
        .ok_or(AppError::Validation("Un email valide est requis".into()))?;
    let telephone = telephone
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::Validation("Le téléphone est requis".into()))?;
    let cv = cv.ok_or(AppError::Validation("Le CV est requis".into()))?;

    check_file(&cv, &DOCUMENT_EXTENSIONS, "CV")?;
    if let Some(ref lettre) = lettre {
        check_file(lettre, &DOCUMENT_EXTENSIONS, "Lettre de motivation")?;
    }
    if let Some(ref diplome) = diplome {
        check_file(diplome, &DIPLOMA_EXTENSIONS, "Diplôme")?;
    }

    // Same index-backed rule as elsewhere: one application per offer and
    // email. The pre-check only yields the readable message.
    if state
        .job_application_repo
        .exists_for(&offer.id, &email_professionnel)
        .await?
    {
        return Err(AppError::Conflict("Vous avez déjà postulé à cette offre".into()));
    }

    let cv_key = Some(store(&state, &cv, "applications/cv").await?.key);
    let lettre_key = match lettre {
        Some(ref file) => Some(store(&state, file, "applications/lettres").await?.key),
        None => None,
    };
    let diplome_key = match diplome {
        Some(ref file) => Some(store(&state, file, "applications/diplomes").await?.key),
        None => None,
    };

    let application = JobApplication::new(NewApplicationParams {
        tenant_id: Some(offer.tenant_id.clone()),
        job_offer_id: offer.id.clone(),
        nom_complet,
        email_professionnel,
        telephone,
        motivation,
        cv_key,
        lettre_key,
        diplome_key,
    });

    let created = state.job_application_repo.create(&application).await?;
    info!("Application received: {} for offer {}", created.id, offer.id);
    Ok((StatusCode::CREATED, Json(created)))
}
