// src/handlers/associations.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState};

// GET /api/asociaciones/{entidad}/{id}/{rol}
//
// Travessia genérica do grafo: "Residence/3/administrador" devolve o
// administrador da residência 3 (ou null), "Residence/3/reportes" devolve a
// sequência de reportes. Papel inexistente é erro, FK nula não é.
pub async fn get_related(
    State(app_state): State<AppState>,
    Path((entidad, id, rol)): Path<(String, i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let related = app_state
        .association_repo
        .get_related(&entidad, id, &rol)
        .await?;
    Ok((StatusCode::OK, Json(related.into_value())))
}
