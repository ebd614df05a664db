// src/handlers/activities.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityPayload {
    #[validate(length(min = 1, message = "O título é obrigatório"))]
    pub titulo: String,

    pub descripcion: Option<String>,
    pub fecha_inicio: DateTime<Utc>,

    #[validate(range(min = 1, message = "max_participantes deve ser positivo"))]
    pub max_participantes: i64,

    pub organizador_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateActivityPayload {
    #[validate(length(min = 1, message = "O título não pode ser vazio"))]
    pub titulo: Option<String>,

    pub descripcion: Option<String>,
    pub fecha_inicio: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "max_participantes deve ser positivo"))]
    pub max_participantes: Option<i64>,
}

// POST /api/actividades
pub async fn create_activity(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateActivityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let activity = app_state
        .activity_repo
        .create_activity(
            &payload.titulo,
            payload.descripcion.as_deref(),
            payload.fecha_inicio,
            payload.max_participantes,
            payload.organizador_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(activity)))
}

// GET /api/actividades
pub async fn list_activities(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let activities = app_state.activity_repo.list_all().await?;
    Ok((StatusCode::OK, Json(activities)))
}

// GET /api/actividades/{id}
pub async fn get_activity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let activity = app_state
        .activity_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Atividade"))?;
    Ok((StatusCode::OK, Json(activity)))
}

// PUT /api/actividades/{id}
pub async fn update_activity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateActivityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let activity = app_state
        .activity_repo
        .update_activity(
            id,
            payload.titulo.as_deref(),
            payload.descripcion.as_deref(),
            payload.fecha_inicio,
            payload.max_participantes,
        )
        .await?;

    Ok((StatusCode::OK, Json(activity)))
}

// DELETE /api/actividades/{id}
pub async fn delete_activity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.activity_repo.delete_activity(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
