// src/models/complaint.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Complaint {
    pub id: i64,
    pub usuario_id: i64,
    pub residencia_id: i64,
    pub asunto: String,
    pub descripcion: String,
    pub created_at: DateTime<Utc>,
}
