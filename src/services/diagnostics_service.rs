// src/services/diagnostics_service.rs
//
// Introspecção somente-leitura: confirma que as entidades estão registradas,
// que o grafo de associações está ligado e que as tabelas respondem.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::common::error::AppError;
use crate::models::associations::{Cardinality, associations_of};
use crate::models::registry::{ENTITIES, FieldDescriptor};

#[derive(Debug, Clone, Serialize)]
pub struct EntitySchema {
    pub name: &'static str,
    pub table: &'static str,
    pub fields: &'static [FieldDescriptor],
    pub associations: Vec<AssociationSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssociationSummary {
    pub role: &'static str,
    pub target: &'static str,
    pub cardinality: Cardinality,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityCheck {
    pub name: &'static str,
    pub table: &'static str,
    pub row_count: i64,
}

#[derive(Clone)]
pub struct DiagnosticsService {
    pool: SqlitePool,
}

impl DiagnosticsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Enumera entidades registradas com campos e nomes de associação declarados.
    pub fn schema(&self) -> Vec<EntitySchema> {
        ENTITIES
            .iter()
            .map(|entity| EntitySchema {
                name: entity.name,
                table: entity.table,
                fields: entity.fields,
                associations: associations_of(entity.name)
                    .map(|a| AssociationSummary {
                        role: a.role,
                        target: a.target,
                        cardinality: a.cardinality,
                    })
                    .collect(),
            })
            .collect()
    }

    // Conta as linhas de cada tabela para confirmar que tudo é alcançável.
    pub async fn verify(&self) -> Result<Vec<EntityCheck>, AppError> {
        let mut checks = Vec::with_capacity(ENTITIES.len());
        for entity in ENTITIES {
            let row_count =
                sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", entity.table))
                    .fetch_one(&self.pool)
                    .await?;
            tracing::info!("{}: acesso correto ({} linha(s))", entity.name, row_count);
            checks.push(EntityCheck {
                name: entity.name,
                table: entity.table,
                row_count,
            });
        }
        Ok(checks)
    }
}
