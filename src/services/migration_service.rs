// src/services/migration_service.rs
//
// Migração de tipos legados de reporte para o domínio atual.
// Mapeamento:
//   'Incendio'  -> 'Seguridad'
//   'Eléctrico' -> 'Instalaciones'
//   'Agua'      -> 'Instalaciones'
//   'Robo'      -> 'Seguridad'
//   qualquer outro valor desconhecido -> 'Otro'
//
// Idempotente e tudo-ou-nada: ou todos os registros inválidos são
// reescritos em uma única transação, ou nenhum.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::SqlitePool;

use crate::common::error::AppError;
use crate::db::ReportRepository;
use crate::models::report::ReportTipo;

const TYPE_MAPPING: &[(&str, &str)] = &[
    ("Incendio", "Seguridad"),
    ("Eléctrico", "Instalaciones"),
    ("Agua", "Instalaciones"),
    ("Robo", "Seguridad"),
];

// Valores fora do mapeamento caem em 'Otro'.
fn map_legacy_tipo(valor: &str) -> &'static str {
    TYPE_MAPPING
        .iter()
        .find(|(antiguo, _)| *antiguo == valor)
        .map(|(_, nuevo)| *nuevo)
        .unwrap_or("Otro")
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub migrated_count: u64,
    pub before: BTreeMap<String, i64>,
    pub after: BTreeMap<String, i64>,
}

#[derive(Clone)]
pub struct MigrationService {
    pool: SqlitePool,
    report_repo: ReportRepository,
}

impl MigrationService {
    pub fn new(pool: SqlitePool, report_repo: ReportRepository) -> Self {
        Self { pool, report_repo }
    }

    pub async fn migrate_report_tipos(&self) -> Result<MigrationReport, AppError> {
        tracing::info!("Iniciando migração de tipos de reportes");

        // 1. Carrega todos os reportes (tipo como texto cru)
        let rows = self.report_repo.load_raw_tipos().await?;
        tracing::info!("Total de reportes encontrados: {}", rows.len());

        // 2. Distribuição atual, agrupada por valor
        let before = distribution(&rows);
        for (tipo, count) in &before {
            tracing::info!("  - {}: {} reporte(s)", tipo, count);
        }

        // 3. Registros cujo valor está fora do domínio válido
        let invalid: Vec<&(i64, String)> = rows
            .iter()
            .filter(|(_, tipo)| !ReportTipo::es_valido(tipo))
            .collect();

        // 4. Nada a fazer: nenhuma transação é aberta
        if invalid.is_empty() {
            tracing::info!("Todos os reportes já usam tipos válidos; nada a migrar");
            return Ok(MigrationReport {
                migrated_count: 0,
                after: before.clone(),
                before,
            });
        }

        // 5. Uma única transação para todas as reescritas.
        // Qualquer falha desfaz tudo; o erro aborta antes do commit.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::TransactionError(e.to_string()))?;

        for (id, tipo) in &invalid {
            let nuevo = map_legacy_tipo(tipo);
            tracing::info!("Migrando reporte {}: '{}' -> '{}'", id, tipo, nuevo);
            self.report_repo
                .rewrite_tipo(&mut *tx, *id, nuevo)
                .await
                .map_err(|e| AppError::TransactionError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::TransactionError(e.to_string()))?;

        let migrated_count = invalid.len() as u64;
        tracing::info!("Migração concluída: {} reporte(s) reescritos", migrated_count);

        // 6. Nova distribuição, relida do banco
        let after = distribution(&self.report_repo.load_raw_tipos().await?);

        Ok(MigrationReport { migrated_count, before, after })
    }
}

fn distribution(rows: &[(i64, String)]) -> BTreeMap<String, i64> {
    let mut dist = BTreeMap::new();
    for (_, tipo) in rows {
        *dist.entry(tipo.clone()).or_insert(0) += 1;
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapeamento_legado_cobre_os_quatro_valores() {
        assert_eq!(map_legacy_tipo("Incendio"), "Seguridad");
        assert_eq!(map_legacy_tipo("Eléctrico"), "Instalaciones");
        assert_eq!(map_legacy_tipo("Agua"), "Instalaciones");
        assert_eq!(map_legacy_tipo("Robo"), "Seguridad");
    }

    #[test]
    fn valor_desconhecido_vira_otro() {
        assert_eq!(map_legacy_tipo("Plaga"), "Otro");
    }

    #[test]
    fn todo_destino_pertence_ao_dominio_valido() {
        for (antiguo, _) in TYPE_MAPPING {
            assert!(ReportTipo::es_valido(map_legacy_tipo(antiguo)));
        }
    }
}
