use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateEmployeeRequest, PageQuery, UpdateEmployeeRequest};
use crate::api::dtos::responses::Paginated;
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::employee::{contract_end_date, Employee, NewEmployeeParams};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 10;

pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.salaire < 0 {
        return Err(AppError::Validation("Le salaire doit être positif".into()));
    }

    let employee = Employee::new(NewEmployeeParams {
        tenant_id: ctx.tenant_id.clone(),
        user_id: ctx.user_id.clone(),
        nom: payload.nom,
        prenom: payload.prenom,
        date_naissance: payload.date_naissance,
        contact: payload.contact,
        adresse: payload.adresse,
        poste: payload.poste,
        departement: payload.departement,
        date_prise_fonction: payload.date_prise_fonction,
        salaire: payload.salaire,
        type_contrat: payload.type_contrat,
        duree_contrat: payload.duree_contrat,
    });

    let created = state.employee_repo.create(&employee).await?;
    info!("Employee created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let employees = state.employee_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;
    Ok(Json(Paginated::new(employees, page, PER_PAGE)))
}

pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state
        .employee_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;
    Ok(Json(employee))
}

pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut employee = state
        .employee_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    if let Some(nom) = payload.nom {
        employee.nom = nom;
    }
    if let Some(prenom) = payload.prenom {
        employee.prenom = prenom;
    }
    if let Some(date_naissance) = payload.date_naissance {
        employee.date_naissance = date_naissance;
    }
    if let Some(contact) = payload.contact {
        employee.contact = contact;
    }
    if let Some(adresse) = payload.adresse {
        employee.adresse = adresse;
    }
    if let Some(poste) = payload.poste {
        employee.poste = poste;
    }
    if let Some(departement) = payload.departement {
        employee.departement = departement;
    }
    if let Some(date_prise_fonction) = payload.date_prise_fonction {
        employee.date_prise_fonction = date_prise_fonction;
    }
    if let Some(salaire) = payload.salaire {
        if salaire < 0 {
            return Err(AppError::Validation("Le salaire doit être positif".into()));
        }
        employee.salaire = salaire;
    }
    if let Some(type_contrat) = payload.type_contrat {
        employee.type_contrat = type_contrat;
    }
    if let Some(duree_contrat) = payload.duree_contrat {
        employee.duree_contrat = duree_contrat;
    }

    // Contract terms may have moved; the end date always follows them.
    employee.date_fin_contrat = contract_end_date(
        &employee.type_contrat,
        employee.duree_contrat,
        employee.date_prise_fonction,
    );

    let updated = state.employee_repo.update(&employee).await?;
    info!("Employee updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.employee_repo.soft_delete(&ctx.tenant_id, &id).await?;
    info!("Employee deactivated: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
