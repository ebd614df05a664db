// src/db/report_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::common::db_utils::map_integrity;
use crate::common::error::AppError;
use crate::models::report::{
    PriorityBreakdown, Report, ReportEstado, ReportPrioridad, ReportStatistics, ReportTipo,
    StatusBreakdown, TypeCount,
};

// Critérios opcionais de listagem; tudo ausente lista o acervo inteiro.
#[derive(Debug, Default, Clone)]
pub struct ReportFilter {
    pub estado: Option<ReportEstado>,
    pub tipo: Option<ReportTipo>,
    pub residencia_id: Option<i64>,
}

#[derive(Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CRUD
    // =========================================================================

    // Prioridade ausente vira 'Media'; o estado inicial 'Abierto' vem do
    // DEFAULT do schema.
    pub async fn create_report(
        &self,
        tipo: ReportTipo,
        residencia_id: i64,
        reportado_por_id: i64,
        titulo: &str,
        descripcion: &str,
        prioridad: Option<ReportPrioridad>,
    ) -> Result<Report, AppError> {
        let prioridad_final = prioridad.unwrap_or(ReportPrioridad::Media);

        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (tipo, residencia_id, reportado_por_id, titulo, descripcion, prioridad)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING *
            "#,
        )
        .bind(tipo)
        .bind(residencia_id)
        .bind(reportado_por_id)
        .bind(titulo)
        .bind(descripcion)
        .bind(prioridad_final)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "reports"))?;

        Ok(report)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Report>, AppError> {
        let maybe = sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe)
    }

    pub async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, AppError> {
        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT * FROM reports
            WHERE (?1 IS NULL OR estado = ?1)
              AND (?2 IS NULL OR tipo = ?2)
              AND (?3 IS NULL OR residencia_id = ?3)
            ORDER BY fecha_reporte DESC, id DESC
            "#,
        )
        .bind(filter.estado)
        .bind(filter.tipo)
        .bind(filter.residencia_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reports)
    }

    // Atualização parcial. Transições de estado não são restringidas.
    // COALESCE preserva o valor atual quando o campo vem ausente, então este
    // caminho nunca anula fecha_resolucion nem notas_adicionales; para limpar
    // asignado_a existe o `unassign` dedicado.
    pub async fn update_report(
        &self,
        id: i64,
        titulo: Option<&str>,
        descripcion: Option<&str>,
        prioridad: Option<ReportPrioridad>,
        estado: Option<ReportEstado>,
        asignado_a: Option<i64>,
        fecha_resolucion: Option<DateTime<Utc>>,
        notas_adicionales: Option<&str>,
    ) -> Result<Report, AppError> {
        let maybe = sqlx::query_as::<_, Report>(
            r#"
            UPDATE reports
            SET titulo            = COALESCE(?2, titulo),
                descripcion       = COALESCE(?3, descripcion),
                prioridad         = COALESCE(?4, prioridad),
                estado            = COALESCE(?5, estado),
                asignado_a        = COALESCE(?6, asignado_a),
                fecha_resolucion  = COALESCE(?7, fecha_resolucion),
                notas_adicionales = COALESCE(?8, notas_adicionales),
                updated_at        = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(titulo)
        .bind(descripcion)
        .bind(prioridad)
        .bind(estado)
        .bind(asignado_a)
        .bind(fecha_resolucion)
        .bind(notas_adicionales)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "reports"))?;

        maybe.ok_or(AppError::NotFound("Reporte"))
    }

    // Remove a atribuição de responsável (asignado_a volta a nulo).
    pub async fn unassign(&self, id: i64) -> Result<Report, AppError> {
        let maybe = sqlx::query_as::<_, Report>(
            r#"
            UPDATE reports
            SET asignado_a = NULL, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        maybe.ok_or(AppError::NotFound("Reporte"))
    }

    pub async fn delete_report(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reports WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reporte"));
        }
        Ok(())
    }

    // =========================================================================
    //  ESTATÍSTICAS
    // =========================================================================

    pub async fn statistics(&self) -> Result<ReportStatistics, AppError> {
        let (total, abierto, en_progreso, resuelto, cerrado, critica, alta) =
            sqlx::query_as::<_, (i64, i64, i64, i64, i64, i64, i64)>(
                r#"
                SELECT COUNT(*),
                       COALESCE(SUM(estado = 'Abierto'), 0),
                       COALESCE(SUM(estado = 'En Progreso'), 0),
                       COALESCE(SUM(estado = 'Resuelto'), 0),
                       COALESCE(SUM(estado = 'Cerrado'), 0),
                       COALESCE(SUM(prioridad = 'Crítica'), 0),
                       COALESCE(SUM(prioridad = 'Alta'), 0)
                FROM reports
                "#,
            )
            .fetch_one(&self.pool)
            .await?;

        let by_type = sqlx::query_as::<_, TypeCount>(
            "SELECT tipo, COUNT(*) AS count FROM reports GROUP BY tipo ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ReportStatistics {
            total,
            by_status: StatusBreakdown { abierto, en_progreso, resuelto, cerrado },
            by_priority: PriorityBreakdown { critica, alta },
            by_type,
        })
    }

    // =========================================================================
    //  SUPORTE À MIGRAÇÃO DE TIPOS
    // =========================================================================
    // O tipo é lido como texto cru: linhas legadas têm valores fora do enum.

    pub async fn load_raw_tipos(&self) -> Result<Vec<(i64, String)>, AppError> {
        let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, tipo FROM reports ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn rewrite_tipo<'e, E>(
        &self,
        executor: E,
        id: i64,
        nuevo_tipo: &str,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("UPDATE reports SET tipo = ?2, updated_at = CURRENT_TIMESTAMP WHERE id = ?1")
            .bind(id)
            .bind(nuevo_tipo)
            .execute(executor)
            .await?;
        Ok(())
    }
}
