// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Papel do usuário dentro do condomínio.
// Os literais viajam exatamente assim pela API e pelo banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum UserRole {
    Administrador,
    Residente,
    Guardia,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub email: String,

    // Nunca devolvemos o hash pela API.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub rol: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
