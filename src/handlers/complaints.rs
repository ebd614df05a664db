// src/handlers/complaints.rs

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
pub struct CreateComplaintPayload {
    pub usuario_id: i64,
    pub residencia_id: i64,

    #[validate(length(min = 1, message = "O assunto é obrigatório"))]
    pub asunto: String,

    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descripcion: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateComplaintPayload {
    #[validate(length(min = 1, message = "O assunto não pode ser vazio"))]
    pub asunto: Option<String>,

    #[validate(length(min = 1, message = "A descrição não pode ser vazia"))]
    pub descripcion: Option<String>,
}

// POST /api/quejas
pub async fn create_complaint(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateComplaintPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let complaint = app_state
        .complaint_repo
        .create_complaint(
            payload.usuario_id,
            payload.residencia_id,
            &payload.asunto,
            &payload.descripcion,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(complaint)))
}

// GET /api/quejas
pub async fn list_complaints(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let complaints = app_state.complaint_repo.list_all().await?;
    Ok((StatusCode::OK, Json(complaints)))
}

// GET /api/quejas/{id}
pub async fn get_complaint(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = app_state
        .complaint_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Queja"))?;
    Ok((StatusCode::OK, Json(complaint)))
}

// PUT /api/quejas/{id}
pub async fn update_complaint(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateComplaintPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let complaint = app_state
        .complaint_repo
        .update_complaint(id, payload.asunto.as_deref(), payload.descripcion.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(complaint)))
}

// DELETE /api/quejas/{id}
pub async fn delete_complaint(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.complaint_repo.delete_complaint(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
