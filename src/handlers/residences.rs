// src/handlers/residences.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateResidencePayload {
    #[validate(length(min = 1, message = "O código da unidade é obrigatório"))]
    pub codigo_unidad: String,

    pub dueno_id: Option<i64>,
    pub residente_actual_id: Option<i64>,
    pub administrador_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateResidencePayload {
    #[validate(length(min = 1, message = "O código da unidade não pode ser vazio"))]
    pub codigo_unidad: String,
}

// Atribui (ou anula, com usuario_id ausente) um dos papéis da residência.
#[derive(Debug, Deserialize)]
pub struct RolePayload {
    pub usuario_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ReassignPayload {
    pub residente_nuevo_id: i64,
    pub autorizado_por: i64,
}

// POST /api/residencias
pub async fn create_residence(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateResidencePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let residence = app_state
        .residence_repo
        .create_residence(
            &payload.codigo_unidad,
            payload.dueno_id,
            payload.residente_actual_id,
            payload.administrador_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(residence)))
}

// GET /api/residencias
pub async fn list_residences(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let residences = app_state.residence_repo.list_all().await?;
    Ok((StatusCode::OK, Json(residences)))
}

// GET /api/residencias/{id}
pub async fn get_residence(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let residence = app_state
        .residence_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Residência"))?;
    Ok((StatusCode::OK, Json(residence)))
}

// PUT /api/residencias/{id}
pub async fn update_residence(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateResidencePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let residence = app_state
        .residence_repo
        .update_codigo(id, &payload.codigo_unidad)
        .await?;

    Ok((StatusCode::OK, Json(residence)))
}

// DELETE /api/residencias/{id}
pub async fn delete_residence(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.residence_repo.delete_residence(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PAPÉIS QUALIFICADOS (dueno / residenteActual / administrador)
// =============================================================================

// GET /api/residencias/{id}/dueno
pub async fn get_dueno(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.residence_repo.get_dueno(id).await?;
    Ok((StatusCode::OK, Json(user)))
}

// PUT /api/residencias/{id}/dueno
pub async fn set_dueno(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let residence = app_state
        .residence_repo
        .set_dueno(id, payload.usuario_id)
        .await?;
    Ok((StatusCode::OK, Json(residence)))
}

// GET /api/residencias/{id}/residente-actual
pub async fn get_residente_actual(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.residence_repo.get_residente_actual(id).await?;
    Ok((StatusCode::OK, Json(user)))
}

// PUT /api/residencias/{id}/residente-actual
pub async fn set_residente_actual(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let residence = app_state
        .residence_repo
        .set_residente_actual(&app_state.db_pool, id, payload.usuario_id)
        .await?;
    Ok((StatusCode::OK, Json(residence)))
}

// GET /api/residencias/{id}/administrador
pub async fn get_administrador(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.residence_repo.get_administrador(id).await?;
    Ok((StatusCode::OK, Json(user)))
}

// PUT /api/residencias/{id}/administrador
pub async fn set_administrador(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let residence = app_state
        .residence_repo
        .set_administrador(id, payload.usuario_id)
        .await?;
    Ok((StatusCode::OK, Json(residence)))
}

// =============================================================================
//  REASIGNAÇÃO DE RESIDENTE
// =============================================================================

// POST /api/residencias/{id}/reasignar
pub async fn reassign_residente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReassignPayload>,
) -> Result<impl IntoResponse, AppError> {
    let entry = app_state
        .residence_service
        .reassign_residente(id, payload.residente_nuevo_id, payload.autorizado_por)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

// GET /api/residencias/{id}/historial
pub async fn list_history(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let entries = app_state.residence_repo.list_history(id).await?;
    Ok((StatusCode::OK, Json(entries)))
}
