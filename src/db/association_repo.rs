// src/db/association_repo.rs
//
// Travessia genérica do grafo de associações: resolve (entidade, id, papel)
// usando só os descritores estáticos. Tabelas e colunas vêm do registro,
// nunca da entrada do chamador.

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::common::error::AppError;
use crate::models::associations::{AssociationDescriptor, Cardinality, find_association};
use crate::models::registry::{EntityDescriptor, find_entity};

// Resultado de uma travessia: um registro (possivelmente nulo) ou uma sequência.
#[derive(Debug)]
pub enum RelatedRecords {
    One(Option<Value>),
    Many(Vec<Value>),
}

impl RelatedRecords {
    pub fn into_value(self) -> Value {
        match self {
            RelatedRecords::One(Some(v)) => v,
            RelatedRecords::One(None) => Value::Null,
            RelatedRecords::Many(items) => Value::Array(items),
        }
    }
}

#[derive(Clone)]
pub struct AssociationRepository {
    pool: SqlitePool,
}

impl AssociationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // FK nula ou alvo ausente => nulo/vazio, nunca uma falha.
    // Entidade ou papel fora do grafo => erro explícito.
    pub async fn get_related(
        &self,
        entity: &str,
        instance_id: i64,
        role: &str,
    ) -> Result<RelatedRecords, AppError> {
        let source = find_entity(entity)
            .ok_or_else(|| AppError::UnknownEntity(entity.to_string()))?;

        let assoc = find_association(source.name, role).ok_or_else(|| {
            AppError::UnknownAssociation {
                entity: entity.to_string(),
                role: role.to_string(),
            }
        })?;

        // A instância de origem precisa existir para a travessia ter sentido.
        let exists = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {} WHERE id = ?1",
            source.table
        ))
        .bind(instance_id)
        .fetch_one(&self.pool)
        .await?;

        if exists == 0 {
            return Err(AppError::NotFound(source.name));
        }

        let target = find_entity(assoc.target)
            .ok_or_else(|| AppError::UnknownEntity(assoc.target.to_string()))?;

        match assoc.cardinality {
            Cardinality::BelongsTo => self.traverse_belongs_to(source, target, assoc, instance_id).await,
            Cardinality::HasMany => self.traverse_has_many(target, assoc, instance_id).await,
        }
    }

    async fn traverse_belongs_to(
        &self,
        source: &EntityDescriptor,
        target: &EntityDescriptor,
        assoc: &AssociationDescriptor,
        instance_id: i64,
    ) -> Result<RelatedRecords, AppError> {
        let sql = format!(
            "SELECT t.* FROM {target} t JOIN {source} s ON t.id = s.{fk} WHERE s.id = ?1",
            target = target.table,
            source = source.table,
            fk = assoc.foreign_key,
        );
        let maybe_row = sqlx::query(&sql)
            .bind(instance_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(RelatedRecords::One(
            maybe_row.map(|row| row_to_json(&row, target)),
        ))
    }

    async fn traverse_has_many(
        &self,
        target: &EntityDescriptor,
        assoc: &AssociationDescriptor,
        instance_id: i64,
    ) -> Result<RelatedRecords, AppError> {
        let sql = format!(
            "SELECT * FROM {table} WHERE {fk} = ?1 ORDER BY id ASC",
            table = target.table,
            fk = assoc.foreign_key,
        );
        let rows = sqlx::query(&sql)
            .bind(instance_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(RelatedRecords::Many(
            rows.iter().map(|row| row_to_json(row, target)).collect(),
        ))
    }
}

// Converte uma linha dinâmica em JSON guiado pelos campos declarados no registro.
fn row_to_json(row: &SqliteRow, entity: &EntityDescriptor) -> Value {
    let mut map = Map::new();
    for field in entity.fields {
        // Credenciais nunca saem pela travessia genérica.
        if field.name == "password_hash" {
            continue;
        }
        let value = match field.kind {
            "integer" => row
                .try_get::<Option<i64>, _>(field.name)
                .ok()
                .flatten()
                .map(Value::from)
                .unwrap_or(Value::Null),
            "real" => row
                .try_get::<Option<f64>, _>(field.name)
                .ok()
                .flatten()
                .map(Value::from)
                .unwrap_or(Value::Null),
            // text, enum, datetime, date, time: tudo TEXT no armazenamento
            _ => row
                .try_get::<Option<String>, _>(field.name)
                .ok()
                .flatten()
                .map(Value::from)
                .unwrap_or(Value::Null),
        };
        map.insert(field.name.to_string(), value);
    }
    Value::Object(map)
}
