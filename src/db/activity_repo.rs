// src/db/activity_repo.rs

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::common::db_utils::map_integrity;
use crate::common::error::AppError;
use crate::models::activity::Activity;

#[derive(Clone)]
pub struct ActivityRepository {
    pool: SqlitePool,
}

impl ActivityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_activity(
        &self,
        titulo: &str,
        descripcion: Option<&str>,
        fecha_inicio: DateTime<Utc>,
        max_participantes: i64,
        organizador_id: i64,
    ) -> Result<Activity, AppError> {
        let activity = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (titulo, descripcion, fecha_inicio, max_participantes, organizador_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING *
            "#,
        )
        .bind(titulo)
        .bind(descripcion)
        .bind(fecha_inicio)
        .bind(max_participantes)
        .bind(organizador_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "activities"))?;

        Ok(activity)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, AppError> {
        let maybe = sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    pub async fn list_all(&self) -> Result<Vec<Activity>, AppError> {
        let activities =
            sqlx::query_as::<_, Activity>("SELECT * FROM activities ORDER BY fecha_inicio ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(activities)
    }

    pub async fn update_activity(
        &self,
        id: i64,
        titulo: Option<&str>,
        descripcion: Option<&str>,
        fecha_inicio: Option<DateTime<Utc>>,
        max_participantes: Option<i64>,
    ) -> Result<Activity, AppError> {
        let maybe = sqlx::query_as::<_, Activity>(
            r#"
            UPDATE activities
            SET titulo            = COALESCE(?2, titulo),
                descripcion       = COALESCE(?3, descripcion),
                fecha_inicio      = COALESCE(?4, fecha_inicio),
                max_participantes = COALESCE(?5, max_participantes),
                updated_at        = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(titulo)
        .bind(descripcion)
        .bind(fecha_inicio)
        .bind(max_participantes)
        .fetch_optional(&self.pool)
        .await?;

        maybe.ok_or(AppError::NotFound("Atividade"))
    }

    pub async fn delete_activity(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Atividade"));
        }
        Ok(())
    }
}
