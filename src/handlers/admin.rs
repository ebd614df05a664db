// src/handlers/admin.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{common::error::AppError, config::AppState};

// GET /api/admin/esquema
pub async fn schema(State(app_state): State<AppState>) -> impl IntoResponse {
    let entities = app_state.diagnostics_service.schema();
    (StatusCode::OK, Json(entities))
}

// GET /api/admin/verificar
pub async fn verify(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let checks = app_state.diagnostics_service.verify().await?;
    Ok((StatusCode::OK, Json(checks)))
}

// POST /api/admin/migrar-tipos-reportes
//
// Entrada operacional da migração: sem argumentos, idempotente, devolve a
// contagem de registros reescritos e a distribuição antes/depois.
pub async fn migrate_report_tipos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.migration_service.migrate_report_tipos().await?;
    Ok((StatusCode::OK, Json(report)))
}
