// src/handlers/reports.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    db::report_repo::ReportFilter,
    models::report::{ReportEstado, ReportPrioridad, ReportTipo},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReportPayload {
    // Valores fora do domínio fechado são rejeitados na desserialização.
    pub tipo: ReportTipo,

    pub residencia_id: i64,
    pub reportado_por_id: i64,

    #[validate(length(min = 1, message = "O título é obrigatório"))]
    pub titulo: String,

    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descripcion: String,

    // Ausente => 'Media'
    pub prioridad: Option<ReportPrioridad>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReportPayload {
    #[validate(length(min = 1, message = "O título não pode ser vazio"))]
    pub titulo: Option<String>,

    #[validate(length(min = 1, message = "A descrição não pode ser vazia"))]
    pub descripcion: Option<String>,

    pub prioridad: Option<ReportPrioridad>,
    pub estado: Option<ReportEstado>,
    pub asignado_a: Option<i64>,
    pub fecha_resolucion: Option<DateTime<Utc>>,
    pub notas_adicionales: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportFilterQuery {
    pub estado: Option<ReportEstado>,
    pub tipo: Option<ReportTipo>,
    pub residencia_id: Option<i64>,
}

// POST /api/reportes
pub async fn create_report(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateReportPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let report = app_state
        .report_repo
        .create_report(
            payload.tipo,
            payload.residencia_id,
            payload.reportado_por_id,
            &payload.titulo,
            &payload.descripcion,
            payload.prioridad,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(report)))
}

// GET /api/reportes?estado=&tipo=&residencia_id=
pub async fn list_reports(
    State(app_state): State<AppState>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ReportFilter {
        estado: query.estado,
        tipo: query.tipo,
        residencia_id: query.residencia_id,
    };
    let reports = app_state.report_repo.list(&filter).await?;
    Ok((StatusCode::OK, Json(reports)))
}

// GET /api/reportes/estadisticas
pub async fn statistics(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.report_repo.statistics().await?;
    Ok((StatusCode::OK, Json(stats)))
}

// GET /api/reportes/{id}
pub async fn get_report(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state
        .report_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Reporte"))?;
    Ok((StatusCode::OK, Json(report)))
}

// PUT /api/reportes/{id}
pub async fn update_report(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReportPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let report = app_state
        .report_repo
        .update_report(
            id,
            payload.titulo.as_deref(),
            payload.descripcion.as_deref(),
            payload.prioridad,
            payload.estado,
            payload.asignado_a,
            payload.fecha_resolucion,
            payload.notas_adicionales.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

// DELETE /api/reportes/{id}/asignacion
pub async fn unassign_report(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.report_repo.unassign(id).await?;
    Ok((StatusCode::OK, Json(report)))
}

// DELETE /api/reportes/{id}
pub async fn delete_report(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.report_repo.delete_report(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
