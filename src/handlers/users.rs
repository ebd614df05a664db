// src/handlers/users.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::user::UserRole};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub nombre: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(length(min = 8, message = "A senha deve ter no mínimo 8 caracteres"))]
    pub password: String,

    pub rol: Option<UserRole>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, message = "O nome não pode ser vazio"))]
    pub nombre: Option<String>,

    #[validate(email(message = "E-mail inválido"))]
    pub email: Option<String>,

    pub rol: Option<UserRole>,
}

// POST /api/usuarios
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

    let user = app_state
        .user_repo
        .create_user(&payload.nombre, &payload.email, &password_hash, payload.rol)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// GET /api/usuarios
pub async fn list_users(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list_all().await?;
    Ok((StatusCode::OK, Json(users)))
}

// GET /api/usuarios/{id}
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Usuário"))?;
    Ok((StatusCode::OK, Json(user)))
}

// PUT /api/usuarios/{id}
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = app_state
        .user_repo
        .update_user(
            id,
            payload.nombre.as_deref(),
            payload.email.as_deref(),
            payload.rol,
        )
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

// DELETE /api/usuarios/{id}
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.user_repo.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
