// src/db/complaint_repo.rs

use sqlx::SqlitePool;

use crate::common::db_utils::map_integrity;
use crate::common::error::AppError;
use crate::models::complaint::Complaint;

#[derive(Clone)]
pub struct ComplaintRepository {
    pool: SqlitePool,
}

impl ComplaintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_complaint(
        &self,
        usuario_id: i64,
        residencia_id: i64,
        asunto: &str,
        descripcion: &str,
    ) -> Result<Complaint, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(
            r#"
            INSERT INTO complaints (usuario_id, residencia_id, asunto, descripcion)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(usuario_id)
        .bind(residencia_id)
        .bind(asunto)
        .bind(descripcion)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "complaints"))?;

        Ok(complaint)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Complaint>, AppError> {
        let maybe = sqlx::query_as::<_, Complaint>("SELECT * FROM complaints WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    pub async fn list_all(&self) -> Result<Vec<Complaint>, AppError> {
        let complaints =
            sqlx::query_as::<_, Complaint>("SELECT * FROM complaints ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(complaints)
    }

    pub async fn update_complaint(
        &self,
        id: i64,
        asunto: Option<&str>,
        descripcion: Option<&str>,
    ) -> Result<Complaint, AppError> {
        let maybe = sqlx::query_as::<_, Complaint>(
            r#"
            UPDATE complaints
            SET asunto      = COALESCE(?2, asunto),
                descripcion = COALESCE(?3, descripcion)
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(asunto)
        .bind(descripcion)
        .fetch_optional(&self.pool)
        .await?;

        maybe.ok_or(AppError::NotFound("Queja"))
    }

    pub async fn delete_complaint(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Queja"));
        }
        Ok(())
    }
}
