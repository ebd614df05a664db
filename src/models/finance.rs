// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceCost {
    pub id: i64,
    pub residencia_id: i64,
    pub monto: f64,

    // Período de cobrança, ex: "2026-08".
    pub periodo: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub residente_id: i64,
    pub servicio_costo_id: i64,
    pub monto: f64,
    pub fecha_pago: NaiveDate,
    pub created_at: DateTime<Utc>,
}
