// src/models/associations.rs
//
// O grafo de associações como tabela estática de descritores.
// Cada aresta do domínio aparece aqui com seu rótulo de papel; a travessia
// genérica (db/association_repo.rs) consome esta tabela, sem nenhuma
// mutação de tipos em tempo de execução.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinality {
    // A chave estrangeira mora na entidade de origem; resultado único (ou nulo).
    BelongsTo,
    // A chave estrangeira mora na entidade alvo; resultado é uma sequência.
    HasMany,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssociationDescriptor {
    pub source: &'static str,
    pub target: &'static str,
    pub foreign_key: &'static str,
    pub role: &'static str,
    pub cardinality: Cardinality,
}

use Cardinality::{BelongsTo, HasMany};

macro_rules! edge {
    ($source:literal -> $target:literal, $fk:literal, $role:literal, $card:expr) => {
        AssociationDescriptor {
            source: $source,
            target: $target,
            foreign_key: $fk,
            role: $role,
            cardinality: $card,
        }
    };
}

// ===== GRAFO COMPLETO =====
// Os rótulos são contrato de API: "administrador" nunca pode devolver o "dueno".
pub static ASSOCIATIONS: &[AssociationDescriptor] = &[
    // --- Residence <-> User (três arestas qualificadas por papel) ---
    edge!("Residence" -> "User", "dueno_id", "dueno", BelongsTo),
    edge!("User" -> "Residence", "dueno_id", "residenciasComoDueno", HasMany),
    edge!("Residence" -> "User", "residente_actual_id", "residenteActual", BelongsTo),
    edge!("User" -> "Residence", "residente_actual_id", "residenciasComoResidente", HasMany),
    edge!("Residence" -> "User", "administrador_id", "administrador", BelongsTo),
    edge!("User" -> "Residence", "administrador_id", "residenciasComoAdministrador", HasMany),
    // --- ReassignmentHistory ---
    edge!("ReassignmentHistory" -> "Residence", "residencia_id", "residencia", BelongsTo),
    edge!("Residence" -> "ReassignmentHistory", "residencia_id", "historialReasignaciones", HasMany),
    edge!("ReassignmentHistory" -> "User", "residente_anterior_id", "residenteAnterior", BelongsTo),
    edge!("ReassignmentHistory" -> "User", "residente_nuevo_id", "residenteNuevo", BelongsTo),
    edge!("ReassignmentHistory" -> "User", "autorizado_por", "autorizadoPor", BelongsTo),
    // --- Activity ---
    edge!("User" -> "Activity", "organizador_id", "actividadesOrganizadas", HasMany),
    edge!("Activity" -> "User", "organizador_id", "organizador", BelongsTo),
    // --- Amenity / AmenityReservation ---
    edge!("Amenity" -> "AmenityReservation", "amenidad_id", "reservas", HasMany),
    edge!("AmenityReservation" -> "Amenity", "amenidad_id", "amenidad", BelongsTo),
    edge!("User" -> "AmenityReservation", "usuario_id", "reservasAmenidades", HasMany),
    edge!("AmenityReservation" -> "User", "usuario_id", "usuario", BelongsTo),
    // --- Report ---
    edge!("User" -> "Report", "reportado_por_id", "reportesCreados", HasMany),
    edge!("Report" -> "User", "reportado_por_id", "reportadoPor", BelongsTo),
    edge!("User" -> "Report", "asignado_a", "reportesAsignados", HasMany),
    edge!("Report" -> "User", "asignado_a", "asignadoA", BelongsTo),
    edge!("Residence" -> "Report", "residencia_id", "reportes", HasMany),
    edge!("Report" -> "Residence", "residencia_id", "residencia", BelongsTo),
    // --- Complaint ---
    edge!("User" -> "Complaint", "usuario_id", "quejas", HasMany),
    edge!("Complaint" -> "User", "usuario_id", "usuario", BelongsTo),
    edge!("Residence" -> "Complaint", "residencia_id", "quejas", HasMany),
    edge!("Complaint" -> "Residence", "residencia_id", "residencia", BelongsTo),
    // --- Payment ---
    edge!("User" -> "Payment", "residente_id", "pagos", HasMany),
    edge!("Payment" -> "User", "residente_id", "residente", BelongsTo),
    edge!("ServiceCost" -> "Payment", "servicio_costo_id", "pagos", HasMany),
    edge!("Payment" -> "ServiceCost", "servicio_costo_id", "servicioCosto", BelongsTo),
    // --- ServiceCost ---
    edge!("Residence" -> "ServiceCost", "residencia_id", "costos", HasMany),
    edge!("ServiceCost" -> "Residence", "residencia_id", "residencia", BelongsTo),
];

// Busca a aresta pelo par (entidade de origem, papel).
pub fn find_association(source: &str, role: &str) -> Option<&'static AssociationDescriptor> {
    ASSOCIATIONS
        .iter()
        .find(|a| a.source == source && a.role == role)
}

// Todas as arestas declaradas a partir de uma entidade.
pub fn associations_of(source: &str) -> impl Iterator<Item = &'static AssociationDescriptor> {
    ASSOCIATIONS.iter().filter(move |a| a.source == source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn papeis_qualificados_sao_distinguiveis() {
        let dueno = find_association("Residence", "dueno").unwrap();
        let admin = find_association("Residence", "administrador").unwrap();
        assert_eq!(dueno.foreign_key, "dueno_id");
        assert_eq!(admin.foreign_key, "administrador_id");
        assert_ne!(dueno.foreign_key, admin.foreign_key);
    }

    #[test]
    fn papel_desconhecido_nao_resolve() {
        assert!(find_association("Residence", "porteiro").is_none());
        assert!(find_association("Fantasma", "dueno").is_none());
    }

    #[test]
    fn toda_aresta_belongs_to_tem_papel_unico_na_origem() {
        for a in ASSOCIATIONS {
            let mesmos = ASSOCIATIONS
                .iter()
                .filter(|b| b.source == a.source && b.role == a.role)
                .count();
            assert_eq!(mesmos, 1, "papel duplicado: {}.{}", a.source, a.role);
        }
    }
}
