// tests/reassignment_tests.rs

mod common;

use common::{seed_user, setup_state};
use condominio_backend::common::error::AppError;

#[tokio::test]
async fn reasignacao_grava_historico_e_atualiza_residente() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let bruno = seed_user(&state, "Bruno", "bruno@example.com").await;
    let admin = seed_user(&state, "Admin", "admin@example.com").await;

    let residencia = state
        .residence_repo
        .create_residence("A-101", None, Some(ana), None)
        .await
        .unwrap()
        .id;

    let entry = state
        .residence_service
        .reassign_residente(residencia, bruno, admin)
        .await
        .unwrap();

    assert_eq!(entry.residencia_id, residencia);
    assert_eq!(entry.residente_anterior_id, Some(ana));
    assert_eq!(entry.residente_nuevo_id, bruno);
    assert_eq!(entry.autorizado_por, admin);

    let r = state.residence_repo.find_by_id(residencia).await.unwrap().unwrap();
    assert_eq!(r.residente_actual_id, Some(bruno));

    // Segunda reasignação: o anterior agora é Bruno.
    let entry = state
        .residence_service
        .reassign_residente(residencia, ana, admin)
        .await
        .unwrap();
    assert_eq!(entry.residente_anterior_id, Some(bruno));

    let historial = state.residence_repo.list_history(residencia).await.unwrap();
    assert_eq!(historial.len(), 2);
}

#[tokio::test]
async fn primeira_atribuicao_tem_anterior_nulo() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let admin = seed_user(&state, "Admin", "admin@example.com").await;

    let residencia = state
        .residence_repo
        .create_residence("B-202", None, None, None)
        .await
        .unwrap()
        .id;

    let entry = state
        .residence_service
        .reassign_residente(residencia, ana, admin)
        .await
        .unwrap();

    assert!(entry.residente_anterior_id.is_none());
}

#[tokio::test]
async fn reasignacao_falhada_nao_deixa_escrita_parcial() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let admin = seed_user(&state, "Admin", "admin@example.com").await;

    let residencia = state
        .residence_repo
        .create_residence("C-303", None, Some(ana), None)
        .await
        .unwrap()
        .id;

    // Novo residente inexistente: a FK aborta a transação inteira.
    let err = state
        .residence_service
        .reassign_residente(residencia, 999, admin)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::IntegrityError(_)), "{err:?}");

    // Nem histórico nem atualização de residente sobreviveram.
    let historial = state.residence_repo.list_history(residencia).await.unwrap();
    assert!(historial.is_empty());

    let r = state.residence_repo.find_by_id(residencia).await.unwrap().unwrap();
    assert_eq!(r.residente_actual_id, Some(ana));
}

#[tokio::test]
async fn reasignacao_de_residencia_inexistente_e_not_found() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;

    let err = state
        .residence_service
        .reassign_residente(999, ana, ana)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "{err:?}");
}
