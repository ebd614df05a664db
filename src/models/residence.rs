// src/models/residence.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Residence {
    pub id: i64,
    pub codigo_unidad: String,

    // Três vínculos independentes com users, qualificados por papel.
    // O mesmo usuário pode ocupar mais de um papel ao mesmo tempo, ou nenhum.
    pub dueno_id: Option<i64>,
    pub residente_actual_id: Option<i64>,
    pub administrador_id: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReassignmentHistory {
    pub id: i64,
    pub residencia_id: i64,

    // Nulo na primeira atribuição de residente.
    pub residente_anterior_id: Option<i64>,
    pub residente_nuevo_id: i64,
    pub autorizado_por: i64,

    pub fecha_reasignacion: DateTime<Utc>,
}
