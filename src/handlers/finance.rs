// src/handlers/finance.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{common::error::AppError, config::AppState};

// =============================================================================
//  COSTOS DE SERVIÇO
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceCostPayload {
    pub residencia_id: i64,

    #[validate(range(min = 0.0, message = "O valor não pode ser negativo"))]
    pub monto: f64,

    #[validate(length(min = 1, message = "O período é obrigatório"))]
    pub periodo: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceCostPayload {
    #[validate(range(min = 0.0, message = "O valor não pode ser negativo"))]
    pub monto: Option<f64>,

    #[validate(length(min = 1, message = "O período não pode ser vazio"))]
    pub periodo: Option<String>,
}

// POST /api/costos
pub async fn create_service_cost(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateServiceCostPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cost = app_state
        .finance_repo
        .create_service_cost(payload.residencia_id, payload.monto, &payload.periodo)
        .await?;

    Ok((StatusCode::CREATED, Json(cost)))
}

// GET /api/costos
pub async fn list_service_costs(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let costs = app_state.finance_repo.list_service_costs().await?;
    Ok((StatusCode::OK, Json(costs)))
}

// GET /api/costos/{id}
pub async fn get_service_cost(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let cost = app_state
        .finance_repo
        .find_service_cost(id)
        .await?
        .ok_or(AppError::NotFound("Costo de serviço"))?;
    Ok((StatusCode::OK, Json(cost)))
}

// PUT /api/costos/{id}
pub async fn update_service_cost(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateServiceCostPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cost = app_state
        .finance_repo
        .update_service_cost(id, payload.monto, payload.periodo.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(cost)))
}

// DELETE /api/costos/{id}
pub async fn delete_service_cost(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.finance_repo.delete_service_cost(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PAGAMENTOS
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentPayload {
    pub residente_id: i64,
    pub servicio_costo_id: i64,

    #[validate(range(min = 0.0, message = "O valor não pode ser negativo"))]
    pub monto: f64,

    pub fecha_pago: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePaymentPayload {
    #[validate(range(min = 0.0, message = "O valor não pode ser negativo"))]
    pub monto: Option<f64>,

    pub fecha_pago: Option<NaiveDate>,
}

// POST /api/pagos
pub async fn create_payment(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let payment = app_state
        .finance_repo
        .create_payment(
            payload.residente_id,
            payload.servicio_costo_id,
            payload.monto,
            payload.fecha_pago,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

// GET /api/pagos
pub async fn list_payments(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let payments = app_state.finance_repo.list_payments().await?;
    Ok((StatusCode::OK, Json(payments)))
}

// GET /api/pagos/{id}
pub async fn get_payment(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let payment = app_state
        .finance_repo
        .find_payment(id)
        .await?
        .ok_or(AppError::NotFound("Pagamento"))?;
    Ok((StatusCode::OK, Json(payment)))
}

// PUT /api/pagos/{id}
pub async fn update_payment(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePaymentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let payment = app_state
        .finance_repo
        .update_payment(id, payload.monto, payload.fecha_pago)
        .await?;

    Ok((StatusCode::OK, Json(payment)))
}

// DELETE /api/pagos/{id}
pub async fn delete_payment(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.finance_repo.delete_payment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
