// src/handlers/amenities.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, NaiveTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::amenity::ReservationStatus};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAmenityPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub nombre: String,

    pub descripcion: Option<String>,

    #[validate(range(min = 1, message = "A capacidade deve ser positiva"))]
    pub capacidad: i64,

    pub horario_apertura: NaiveTime,
    pub horario_cierre: NaiveTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAmenityPayload {
    #[validate(length(min = 1, message = "O nome não pode ser vazio"))]
    pub nombre: Option<String>,

    pub descripcion: Option<String>,

    #[validate(range(min = 1, message = "A capacidade deve ser positiva"))]
    pub capacidad: Option<i64>,

    pub horario_apertura: Option<NaiveTime>,
    pub horario_cierre: Option<NaiveTime>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationPayload {
    pub usuario_id: i64,
    pub fecha_reserva: DateTime<Utc>,
    // Ausente => 'Pendiente'
    pub estado: Option<ReservationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReservationPayload {
    pub estado: ReservationStatus,
}

// POST /api/amenidades
pub async fn create_amenity(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAmenityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let amenity = app_state
        .amenity_repo
        .create_amenity(
            &payload.nombre,
            payload.descripcion.as_deref(),
            payload.capacidad,
            payload.horario_apertura,
            payload.horario_cierre,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(amenity)))
}

// GET /api/amenidades
pub async fn list_amenities(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let amenities = app_state.amenity_repo.list_all().await?;
    Ok((StatusCode::OK, Json(amenities)))
}

// GET /api/amenidades/{id}
pub async fn get_amenity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = app_state
        .amenity_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Amenidade"))?;
    Ok((StatusCode::OK, Json(amenity)))
}

// PUT /api/amenidades/{id}
pub async fn update_amenity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAmenityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let amenity = app_state
        .amenity_repo
        .update_amenity(
            id,
            payload.nombre.as_deref(),
            payload.descripcion.as_deref(),
            payload.capacidad,
            payload.horario_apertura,
            payload.horario_cierre,
        )
        .await?;

    Ok((StatusCode::OK, Json(amenity)))
}

// DELETE /api/amenidades/{id}
pub async fn delete_amenity(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.amenity_repo.delete_amenity(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  RESERVAS
// =============================================================================

// POST /api/amenidades/{id}/reservas
pub async fn create_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateReservationPayload>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = app_state
        .amenity_repo
        .create_reservation(id, payload.usuario_id, payload.fecha_reserva, payload.estado)
        .await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

// GET /api/amenidades/{id}/reservas
pub async fn list_reservations(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = app_state.amenity_repo.list_reservations(id).await?;
    Ok((StatusCode::OK, Json(reservations)))
}

// GET /api/reservas/{id}
pub async fn get_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = app_state
        .amenity_repo
        .find_reservation(id)
        .await?
        .ok_or(AppError::NotFound("Reserva"))?;
    Ok((StatusCode::OK, Json(reservation)))
}

// PUT /api/reservas/{id}
pub async fn update_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReservationPayload>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = app_state
        .amenity_repo
        .update_reservation_estado(id, payload.estado)
        .await?;
    Ok((StatusCode::OK, Json(reservation)))
}

// DELETE /api/reservas/{id}
pub async fn delete_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.amenity_repo.delete_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
