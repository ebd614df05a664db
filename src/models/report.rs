// src/models/report.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// --- Enums (domínios fechados de Report) ---
// Os literais em espanhol fazem parte do contrato da API e do banco:
// precisam ir e voltar byte a byte.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ReportTipo {
    Mantenimiento,
    Limpieza,
    Seguridad,
    Instalaciones,
    Otro,
}

impl ReportTipo {
    // Domínio válido como strings, na ordem de declaração.
    pub const VALIDOS: [&'static str; 5] = [
        "Mantenimiento",
        "Limpieza",
        "Seguridad",
        "Instalaciones",
        "Otro",
    ];

    pub fn es_valido(valor: &str) -> bool {
        Self::VALIDOS.contains(&valor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportTipo::Mantenimiento => "Mantenimiento",
            ReportTipo::Limpieza => "Limpieza",
            ReportTipo::Seguridad => "Seguridad",
            ReportTipo::Instalaciones => "Instalaciones",
            ReportTipo::Otro => "Otro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ReportPrioridad {
    Baja,
    Media,
    Alta,
    #[sqlx(rename = "Crítica")]
    #[serde(rename = "Crítica")]
    Critica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ReportEstado {
    Abierto,
    #[sqlx(rename = "En Progreso")]
    #[serde(rename = "En Progreso")]
    EnProgreso,
    Resuelto,
    Cerrado,
}

// --- Struct ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: i64,
    pub tipo: ReportTipo,

    pub residencia_id: i64,
    pub reportado_por_id: i64,
    pub asignado_a: Option<i64>,

    pub titulo: String,
    pub descripcion: String,

    pub prioridad: ReportPrioridad,
    pub estado: ReportEstado,

    pub fecha_reporte: DateTime<Utc>,
    pub fecha_resolucion: Option<DateTime<Utc>>,
    pub notas_adicionales: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Agregados usados por GET /api/reportes/estadisticas.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    pub total: i64,
    pub by_status: StatusBreakdown,
    pub by_priority: PriorityBreakdown,
    pub by_type: Vec<TypeCount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub abierto: i64,
    pub en_progreso: i64,
    pub resuelto: i64,
    pub cerrado: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityBreakdown {
    pub critica: i64,
    pub alta: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TypeCount {
    pub tipo: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prioridad_critica_serializa_com_acento() {
        let json = serde_json::to_string(&ReportPrioridad::Critica).unwrap();
        assert_eq!(json, "\"Crítica\"");

        let de: ReportPrioridad = serde_json::from_str("\"Crítica\"").unwrap();
        assert_eq!(de, ReportPrioridad::Critica);
    }

    #[test]
    fn estado_en_progreso_preserva_o_literal() {
        let json = serde_json::to_string(&ReportEstado::EnProgreso).unwrap();
        assert_eq!(json, "\"En Progreso\"");

        let de: ReportEstado = serde_json::from_str("\"En Progreso\"").unwrap();
        assert_eq!(de, ReportEstado::EnProgreso);
    }

    #[test]
    fn valor_fora_do_dominio_e_rejeitado() {
        assert!(serde_json::from_str::<ReportTipo>("\"Incendio\"").is_err());
        assert!(serde_json::from_str::<ReportEstado>("\"Pendiente\"").is_err());
    }

    #[test]
    fn dominio_valido_de_tipo() {
        assert!(ReportTipo::es_valido("Seguridad"));
        assert!(!ReportTipo::es_valido("Incendio"));
        for tipo in [
            ReportTipo::Mantenimiento,
            ReportTipo::Limpieza,
            ReportTipo::Seguridad,
            ReportTipo::Instalaciones,
            ReportTipo::Otro,
        ] {
            assert!(ReportTipo::es_valido(tipo.as_str()));
        }
    }
}
