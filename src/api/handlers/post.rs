use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreatePostRequest, PageQuery, UpdatePostRequest};
use crate::api::dtos::responses::Paginated;
use crate::api::extractors::tenant::TenantContext;
use crate::domain::models::post::Post;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

const PER_PAGE: i64 = 20;

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let post = Post::new(
        ctx.tenant_id.clone(),
        ctx.user_id.clone(),
        payload.intitule,
        payload.departement,
        payload.description,
        payload.montant_augmentation,
    );

    let created = state.post_repo.create(&post).await?;
    info!("Post created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let posts = state.post_repo.list(&ctx.tenant_id, page, PER_PAGE).await?;
    Ok(Json(Paginated::new(posts, page, PER_PAGE)))
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .post_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Post not found".into()))?;
    Ok(Json(post))
}

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut post = state
        .post_repo
        .find_by_id(&ctx.tenant_id, &id)
        .await?
        .ok_or(AppError::NotFound("Post not found".into()))?;

    if let Some(intitule) = payload.intitule {
        post.intitule = intitule;
    }
    if let Some(departement) = payload.departement {
        post.departement = departement;
    }
    if let Some(description) = payload.description {
        post.description = Some(description);
    }
    if let Some(montant) = payload.montant_augmentation {
        post.montant_augmentation = Some(montant);
    }

    let updated = state.post_repo.update(&post).await?;
    info!("Post updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    ctx: TenantContext,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.post_repo.delete(&ctx.tenant_id, &id).await?;
    info!("Post deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
