// src/db/residence_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::common::db_utils::map_integrity;
use crate::common::error::AppError;
use crate::models::residence::{ReassignmentHistory, Residence};
use crate::models::user::User;

#[derive(Clone)]
pub struct ResidenceRepository {
    pool: SqlitePool,
}

impl ResidenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  RESIDÊNCIAS
    // =========================================================================

    pub async fn create_residence(
        &self,
        codigo_unidad: &str,
        dueno_id: Option<i64>,
        residente_actual_id: Option<i64>,
        administrador_id: Option<i64>,
    ) -> Result<Residence, AppError> {
        let residence = sqlx::query_as::<_, Residence>(
            r#"
            INSERT INTO residences (codigo_unidad, dueno_id, residente_actual_id, administrador_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(codigo_unidad)
        .bind(dueno_id)
        .bind(residente_actual_id)
        .bind(administrador_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "residences"))?;

        Ok(residence)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Residence>, AppError> {
        let maybe = sqlx::query_as::<_, Residence>("SELECT * FROM residences WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    pub async fn list_all(&self) -> Result<Vec<Residence>, AppError> {
        let residences =
            sqlx::query_as::<_, Residence>("SELECT * FROM residences ORDER BY codigo_unidad ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(residences)
    }

    pub async fn update_codigo(&self, id: i64, codigo_unidad: &str) -> Result<Residence, AppError> {
        let maybe = sqlx::query_as::<_, Residence>(
            r#"
            UPDATE residences
            SET codigo_unidad = ?2, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(codigo_unidad)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "residences"))?;

        maybe.ok_or(AppError::NotFound("Residência"))
    }

    pub async fn delete_residence(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM residences WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_integrity(e, "residences"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Residência"));
        }
        Ok(())
    }

    // =========================================================================
    //  PAPÉIS (dueno / residenteActual / administrador)
    // =========================================================================
    // Cada papel é atribuível e anulável de forma independente; mexer em um
    // nunca toca nos outros dois.

    pub async fn set_dueno(&self, id: i64, dueno_id: Option<i64>) -> Result<Residence, AppError> {
        self.set_role_column(id, "dueno_id", dueno_id).await
    }

    pub async fn set_administrador(
        &self,
        id: i64,
        administrador_id: Option<i64>,
    ) -> Result<Residence, AppError> {
        self.set_role_column(id, "administrador_id", administrador_id)
            .await
    }

    async fn set_role_column(
        &self,
        id: i64,
        column: &'static str,
        user_id: Option<i64>,
    ) -> Result<Residence, AppError> {
        // `column` vem só das constantes acima, nunca do chamador.
        let sql = format!(
            "UPDATE residences SET {column} = ?2, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?1 RETURNING *"
        );
        let maybe = sqlx::query_as::<_, Residence>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_integrity(e, "residences"))?;

        maybe.ok_or(AppError::NotFound("Residência"))
    }

    // O residente atual também muda dentro da transação de reasignação,
    // por isso esta escrita aceita qualquer executor.
    pub async fn set_residente_actual<'e, E>(
        &self,
        executor: E,
        id: i64,
        residente_id: Option<i64>,
    ) -> Result<Residence, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let maybe = sqlx::query_as::<_, Residence>(
            r#"
            UPDATE residences
            SET residente_actual_id = ?2, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(residente_id)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_integrity(e, "residences"))?;

        maybe.ok_or(AppError::NotFound("Residência"))
    }

    // Consultas tipadas por papel: pedir o administrador jamais devolve o dueno.
    pub async fn get_dueno(&self, id: i64) -> Result<Option<User>, AppError> {
        self.get_role_user(id, "dueno_id").await
    }

    pub async fn get_residente_actual(&self, id: i64) -> Result<Option<User>, AppError> {
        self.get_role_user(id, "residente_actual_id").await
    }

    pub async fn get_administrador(&self, id: i64) -> Result<Option<User>, AppError> {
        self.get_role_user(id, "administrador_id").await
    }

    async fn get_role_user(&self, id: i64, column: &'static str) -> Result<Option<User>, AppError> {
        let sql = format!(
            "SELECT u.* FROM users u JOIN residences r ON u.id = r.{column} WHERE r.id = ?1"
        );
        let maybe = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    // =========================================================================
    //  HISTÓRICO DE REASIGNAÇÕES
    // =========================================================================

    pub async fn insert_history<'e, E>(
        &self,
        executor: E,
        residencia_id: i64,
        residente_anterior_id: Option<i64>,
        residente_nuevo_id: i64,
        autorizado_por: i64,
    ) -> Result<ReassignmentHistory, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let entry = sqlx::query_as::<_, ReassignmentHistory>(
            r#"
            INSERT INTO reassignment_history
                (residencia_id, residente_anterior_id, residente_nuevo_id, autorizado_por)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(residencia_id)
        .bind(residente_anterior_id)
        .bind(residente_nuevo_id)
        .bind(autorizado_por)
        .fetch_one(executor)
        .await
        .map_err(|e| map_integrity(e, "reassignment_history"))?;

        Ok(entry)
    }

    pub async fn list_history(
        &self,
        residencia_id: i64,
    ) -> Result<Vec<ReassignmentHistory>, AppError> {
        let entries = sqlx::query_as::<_, ReassignmentHistory>(
            r#"
            SELECT * FROM reassignment_history
            WHERE residencia_id = ?1
            ORDER BY fecha_reasignacion DESC, id DESC
            "#,
        )
        .bind(residencia_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }
}
