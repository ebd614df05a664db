// tests/diagnostics_tests.rs

mod common;

use common::{seed_user, setup_state};
use condominio_backend::models::associations::Cardinality;

#[tokio::test]
async fn esquema_enumera_as_dez_entidades_com_campos_e_associacoes() {
    let state = setup_state().await;

    let schema = state.diagnostics_service.schema();
    assert_eq!(schema.len(), 10);

    let residence = schema.iter().find(|e| e.name == "Residence").unwrap();
    assert!(residence.fields.iter().any(|f| f.name == "codigo_unidad"));

    // Os três papéis aparecem como associações distintas.
    for role in ["dueno", "residenteActual", "administrador"] {
        let assoc = residence
            .associations
            .iter()
            .find(|a| a.role == role)
            .unwrap_or_else(|| panic!("associação faltando: {role}"));
        assert_eq!(assoc.target, "User");
        assert!(matches!(assoc.cardinality, Cardinality::BelongsTo));
    }

    let user = schema.iter().find(|e| e.name == "User").unwrap();
    assert!(user.associations.iter().any(|a| a.role == "reportesCreados"));
    assert!(user.associations.iter().any(|a| a.role == "pagos"));
}

#[tokio::test]
async fn verificacao_alcanca_todas_as_tabelas() {
    let state = setup_state().await;

    let checks = state.diagnostics_service.verify().await.unwrap();
    assert_eq!(checks.len(), 10);
    assert!(checks.iter().all(|c| c.row_count == 0));

    seed_user(&state, "Ana", "ana@example.com").await;

    let checks = state.diagnostics_service.verify().await.unwrap();
    let users = checks.iter().find(|c| c.name == "User").unwrap();
    assert_eq!(users.row_count, 1);
}
