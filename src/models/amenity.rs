// src/models/amenity.rs

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ReservationStatus {
    Pendiente,
    Confirmada,
    Cancelada,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Amenity {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub capacidad: i64,

    // Janela de disponibilidade da amenidade.
    pub horario_apertura: NaiveTime,
    pub horario_cierre: NaiveTime,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AmenityReservation {
    pub id: i64,
    pub amenidad_id: i64,
    pub usuario_id: i64,
    pub fecha_reserva: DateTime<Utc>,
    pub estado: ReservationStatus,
    pub created_at: DateTime<Utc>,
}
