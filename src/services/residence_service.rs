// src/services/residence_service.rs

use sqlx::SqlitePool;

use crate::common::error::AppError;
use crate::db::ResidenceRepository;
use crate::models::residence::ReassignmentHistory;

#[derive(Clone)]
pub struct ResidenceService {
    pool: SqlitePool,
    repo: ResidenceRepository,
}

impl ResidenceService {
    pub fn new(pool: SqlitePool, repo: ResidenceRepository) -> Self {
        Self { pool, repo }
    }

    // Reasignação de residente: a linha de histórico e a atualização de
    // residente_actual_id acontecem na MESMA transação. Fora dela, escritas
    // em entidades distintas não são atômicas entre si.
    pub async fn reassign_residente(
        &self,
        residencia_id: i64,
        residente_nuevo_id: i64,
        autorizado_por: i64,
    ) -> Result<ReassignmentHistory, AppError> {
        let mut tx = self.pool.begin().await?;

        // Lê o residente anterior dentro da transação.
        let anterior: Option<Option<i64>> = sqlx::query_scalar(
            "SELECT residente_actual_id FROM residences WHERE id = ?1",
        )
        .bind(residencia_id)
        .fetch_optional(&mut *tx)
        .await?;

        let residente_anterior_id = anterior.ok_or(AppError::NotFound("Residência"))?;

        let entry = self
            .repo
            .insert_history(
                &mut *tx,
                residencia_id,
                residente_anterior_id,
                residente_nuevo_id,
                autorizado_por,
            )
            .await?;

        self.repo
            .set_residente_actual(&mut *tx, residencia_id, Some(residente_nuevo_id))
            .await?;

        tx.commit().await?;

        Ok(entry)
    }
}
