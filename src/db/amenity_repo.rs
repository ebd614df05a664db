// src/db/amenity_repo.rs

use chrono::{DateTime, NaiveTime, Utc};
use sqlx::SqlitePool;

use crate::common::db_utils::map_integrity;
use crate::common::error::AppError;
use crate::models::amenity::{Amenity, AmenityReservation, ReservationStatus};

#[derive(Clone)]
pub struct AmenityRepository {
    pool: SqlitePool,
}

impl AmenityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  AMENIDADES
    // =========================================================================

    pub async fn create_amenity(
        &self,
        nombre: &str,
        descripcion: Option<&str>,
        capacidad: i64,
        horario_apertura: NaiveTime,
        horario_cierre: NaiveTime,
    ) -> Result<Amenity, AppError> {
        let amenity = sqlx::query_as::<_, Amenity>(
            r#"
            INSERT INTO amenities (nombre, descripcion, capacidad, horario_apertura, horario_cierre)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(capacidad)
        .bind(horario_apertura)
        .bind(horario_cierre)
        .fetch_one(&self.pool)
        .await?;

        Ok(amenity)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Amenity>, AppError> {
        let maybe = sqlx::query_as::<_, Amenity>("SELECT * FROM amenities WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    pub async fn list_all(&self) -> Result<Vec<Amenity>, AppError> {
        let amenities =
            sqlx::query_as::<_, Amenity>("SELECT * FROM amenities ORDER BY nombre ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(amenities)
    }

    pub async fn update_amenity(
        &self,
        id: i64,
        nombre: Option<&str>,
        descripcion: Option<&str>,
        capacidad: Option<i64>,
        horario_apertura: Option<NaiveTime>,
        horario_cierre: Option<NaiveTime>,
    ) -> Result<Amenity, AppError> {
        let maybe = sqlx::query_as::<_, Amenity>(
            r#"
            UPDATE amenities
            SET nombre           = COALESCE(?2, nombre),
                descripcion      = COALESCE(?3, descripcion),
                capacidad        = COALESCE(?4, capacidad),
                horario_apertura = COALESCE(?5, horario_apertura),
                horario_cierre   = COALESCE(?6, horario_cierre)
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(descripcion)
        .bind(capacidad)
        .bind(horario_apertura)
        .bind(horario_cierre)
        .fetch_optional(&self.pool)
        .await?;

        maybe.ok_or(AppError::NotFound("Amenidade"))
    }

    pub async fn delete_amenity(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_integrity(e, "amenities"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Amenidade"));
        }
        Ok(())
    }

    // =========================================================================
    //  RESERVAS
    // =========================================================================

    pub async fn create_reservation(
        &self,
        amenidad_id: i64,
        usuario_id: i64,
        fecha_reserva: DateTime<Utc>,
        estado: Option<ReservationStatus>,
    ) -> Result<AmenityReservation, AppError> {
        let estado_final = estado.unwrap_or(ReservationStatus::Pendiente);

        let reservation = sqlx::query_as::<_, AmenityReservation>(
            r#"
            INSERT INTO amenity_reservations (amenidad_id, usuario_id, fecha_reserva, estado)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(amenidad_id)
        .bind(usuario_id)
        .bind(fecha_reserva)
        .bind(estado_final)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "amenity_reservations"))?;

        Ok(reservation)
    }

    pub async fn find_reservation(&self, id: i64) -> Result<Option<AmenityReservation>, AppError> {
        let maybe = sqlx::query_as::<_, AmenityReservation>(
            "SELECT * FROM amenity_reservations WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe)
    }

    pub async fn list_reservations(
        &self,
        amenidad_id: i64,
    ) -> Result<Vec<AmenityReservation>, AppError> {
        let reservations = sqlx::query_as::<_, AmenityReservation>(
            r#"
            SELECT * FROM amenity_reservations
            WHERE amenidad_id = ?1
            ORDER BY fecha_reserva ASC
            "#,
        )
        .bind(amenidad_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reservations)
    }

    pub async fn update_reservation_estado(
        &self,
        id: i64,
        estado: ReservationStatus,
    ) -> Result<AmenityReservation, AppError> {
        let maybe = sqlx::query_as::<_, AmenityReservation>(
            "UPDATE amenity_reservations SET estado = ?2 WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(estado)
        .fetch_optional(&self.pool)
        .await?;

        maybe.ok_or(AppError::NotFound("Reserva"))
    }

    pub async fn delete_reservation(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM amenity_reservations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reserva"));
        }
        Ok(())
    }
}
