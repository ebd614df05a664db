// src/models/registry.rs
//
// Registro estático de entidades: nomes, tabelas e campos declarados.
// É a interface que o ferramental de diagnóstico consome para confirmar
// que tudo está registrado e alcançável.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    // Tipo semântico do campo: integer | real | text | enum | datetime | date | time
    pub kind: &'static str,
    pub nullable: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub table: &'static str,
    pub fields: &'static [FieldDescriptor],
}

macro_rules! field {
    ($name:literal, $kind:literal) => {
        FieldDescriptor { name: $name, kind: $kind, nullable: false }
    };
    ($name:literal, $kind:literal, null) => {
        FieldDescriptor { name: $name, kind: $kind, nullable: true }
    };
}

pub static ENTITIES: &[EntityDescriptor] = &[
    EntityDescriptor {
        name: "User",
        table: "users",
        fields: &[
            field!("id", "integer"),
            field!("nombre", "text"),
            field!("email", "text"),
            field!("password_hash", "text"),
            field!("rol", "enum"),
            field!("created_at", "datetime"),
            field!("updated_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "Residence",
        table: "residences",
        fields: &[
            field!("id", "integer"),
            field!("codigo_unidad", "text"),
            field!("dueno_id", "integer", null),
            field!("residente_actual_id", "integer", null),
            field!("administrador_id", "integer", null),
            field!("created_at", "datetime"),
            field!("updated_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "ReassignmentHistory",
        table: "reassignment_history",
        fields: &[
            field!("id", "integer"),
            field!("residencia_id", "integer"),
            field!("residente_anterior_id", "integer", null),
            field!("residente_nuevo_id", "integer"),
            field!("autorizado_por", "integer"),
            field!("fecha_reasignacion", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "Activity",
        table: "activities",
        fields: &[
            field!("id", "integer"),
            field!("titulo", "text"),
            field!("descripcion", "text", null),
            field!("fecha_inicio", "datetime"),
            field!("max_participantes", "integer"),
            field!("organizador_id", "integer"),
            field!("created_at", "datetime"),
            field!("updated_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "Amenity",
        table: "amenities",
        fields: &[
            field!("id", "integer"),
            field!("nombre", "text"),
            field!("descripcion", "text", null),
            field!("capacidad", "integer"),
            field!("horario_apertura", "time"),
            field!("horario_cierre", "time"),
            field!("created_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "AmenityReservation",
        table: "amenity_reservations",
        fields: &[
            field!("id", "integer"),
            field!("amenidad_id", "integer"),
            field!("usuario_id", "integer"),
            field!("fecha_reserva", "datetime"),
            field!("estado", "enum"),
            field!("created_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "Report",
        table: "reports",
        fields: &[
            field!("id", "integer"),
            field!("tipo", "enum"),
            field!("residencia_id", "integer"),
            field!("reportado_por_id", "integer"),
            field!("asignado_a", "integer", null),
            field!("titulo", "text"),
            field!("descripcion", "text"),
            field!("prioridad", "enum"),
            field!("estado", "enum"),
            field!("fecha_reporte", "datetime"),
            field!("fecha_resolucion", "datetime", null),
            field!("notas_adicionales", "text", null),
            field!("created_at", "datetime"),
            field!("updated_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "Complaint",
        table: "complaints",
        fields: &[
            field!("id", "integer"),
            field!("usuario_id", "integer"),
            field!("residencia_id", "integer"),
            field!("asunto", "text"),
            field!("descripcion", "text"),
            field!("created_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "Payment",
        table: "payments",
        fields: &[
            field!("id", "integer"),
            field!("residente_id", "integer"),
            field!("servicio_costo_id", "integer"),
            field!("monto", "real"),
            field!("fecha_pago", "date"),
            field!("created_at", "datetime"),
        ],
    },
    EntityDescriptor {
        name: "ServiceCost",
        table: "service_costs",
        fields: &[
            field!("id", "integer"),
            field!("residencia_id", "integer"),
            field!("monto", "real"),
            field!("periodo", "text"),
            field!("created_at", "datetime"),
        ],
    },
];

pub fn find_entity(name: &str) -> Option<&'static EntityDescriptor> {
    ENTITIES.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::associations::ASSOCIATIONS;

    #[test]
    fn as_dez_entidades_estao_registradas() {
        assert_eq!(ENTITIES.len(), 10);
        for nome in [
            "User",
            "Residence",
            "ReassignmentHistory",
            "Activity",
            "Amenity",
            "AmenityReservation",
            "Report",
            "Complaint",
            "Payment",
            "ServiceCost",
        ] {
            assert!(find_entity(nome).is_some(), "entidade faltando: {nome}");
        }
    }

    #[test]
    fn toda_associacao_referencia_entidades_registradas() {
        for a in ASSOCIATIONS {
            assert!(find_entity(a.source).is_some(), "origem: {}", a.source);
            assert!(find_entity(a.target).is_some(), "alvo: {}", a.target);
        }
    }

    #[test]
    fn toda_chave_estrangeira_e_um_campo_declarado() {
        use crate::models::associations::Cardinality;
        for a in ASSOCIATIONS {
            // BelongsTo: a FK mora na origem; HasMany: mora no alvo.
            let dono_da_fk = match a.cardinality {
                Cardinality::BelongsTo => find_entity(a.source).unwrap(),
                Cardinality::HasMany => find_entity(a.target).unwrap(),
            };
            assert!(
                dono_da_fk.fields.iter().any(|f| f.name == a.foreign_key),
                "{}.{} não declara o campo {}",
                dono_da_fk.name,
                a.role,
                a.foreign_key
            );
        }
    }
}
