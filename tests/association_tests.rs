// tests/association_tests.rs

mod common;

use common::{seed_residence, seed_user, setup_state};
use condominio_backend::common::error::AppError;
use condominio_backend::models::report::ReportTipo;

#[tokio::test]
async fn os_tres_papeis_sao_independentes() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let bruno = seed_user(&state, "Bruno", "bruno@example.com").await;
    let residencia = seed_residence(&state, "A-101").await;

    // Atribui só o dueno; os outros papéis continuam nulos.
    let r = state.residence_repo.set_dueno(residencia, Some(ana)).await.unwrap();
    assert_eq!(r.dueno_id, Some(ana));
    assert!(r.residente_actual_id.is_none());
    assert!(r.administrador_id.is_none());

    // Atribui o administrador; o dueno não muda.
    let r = state
        .residence_repo
        .set_administrador(residencia, Some(bruno))
        .await
        .unwrap();
    assert_eq!(r.dueno_id, Some(ana));
    assert_eq!(r.administrador_id, Some(bruno));

    // O mesmo usuário pode ocupar mais de um papel ao mesmo tempo.
    let r = state
        .residence_repo
        .set_residente_actual(&state.db_pool, residencia, Some(ana))
        .await
        .unwrap();
    assert_eq!(r.dueno_id, Some(ana));
    assert_eq!(r.residente_actual_id, Some(ana));

    // Anular um papel não toca nos outros.
    let r = state.residence_repo.set_dueno(residencia, None).await.unwrap();
    assert!(r.dueno_id.is_none());
    assert_eq!(r.residente_actual_id, Some(ana));
    assert_eq!(r.administrador_id, Some(bruno));
}

#[tokio::test]
async fn consultas_tipadas_nao_confundem_papeis() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let bruno = seed_user(&state, "Bruno", "bruno@example.com").await;

    let residencia = state
        .residence_repo
        .create_residence("B-202", Some(ana), None, Some(bruno))
        .await
        .unwrap()
        .id;

    let dueno = state.residence_repo.get_dueno(residencia).await.unwrap().unwrap();
    let admin = state
        .residence_repo
        .get_administrador(residencia)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(dueno.id, ana);
    assert_eq!(admin.id, bruno);

    // Papel não atribuído devolve nulo, não erro.
    assert!(state
        .residence_repo
        .get_residente_actual(residencia)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn travessia_generica_distingue_papeis_pelo_rotulo() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let bruno = seed_user(&state, "Bruno", "bruno@example.com").await;

    let residencia = state
        .residence_repo
        .create_residence("C-303", Some(ana), None, Some(bruno))
        .await
        .unwrap()
        .id;

    let dueno = state
        .association_repo
        .get_related("Residence", residencia, "dueno")
        .await
        .unwrap()
        .into_value();
    let admin = state
        .association_repo
        .get_related("Residence", residencia, "administrador")
        .await
        .unwrap()
        .into_value();

    assert_eq!(dueno["id"], serde_json::json!(ana));
    assert_eq!(admin["id"], serde_json::json!(bruno));

    // Credenciais não vazam pela travessia genérica.
    assert!(dueno.get("password_hash").is_none());
    assert_eq!(dueno["email"], serde_json::json!("ana@example.com"));
}

#[tokio::test]
async fn travessia_sobre_fk_nula_devolve_null_e_nao_falha() {
    let state = setup_state().await;
    let residencia = seed_residence(&state, "D-404").await;

    let value = state
        .association_repo
        .get_related("Residence", residencia, "residenteActual")
        .await
        .unwrap()
        .into_value();

    assert!(value.is_null());
}

#[tokio::test]
async fn travessia_has_many_devolve_sequencia() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let residencia = seed_residence(&state, "E-505").await;

    for titulo in ["um", "dois"] {
        state
            .report_repo
            .create_report(ReportTipo::Mantenimiento, residencia, ana, titulo, "d", None)
            .await
            .unwrap();
    }

    let reportes = state
        .association_repo
        .get_related("Residence", residencia, "reportes")
        .await
        .unwrap()
        .into_value();

    assert_eq!(reportes.as_array().unwrap().len(), 2);

    let criados = state
        .association_repo
        .get_related("User", ana, "reportesCreados")
        .await
        .unwrap()
        .into_value();
    assert_eq!(criados.as_array().unwrap().len(), 2);

    // Sem reportes atribuídos: sequência vazia, não erro.
    let asignados = state
        .association_repo
        .get_related("User", ana, "reportesAsignados")
        .await
        .unwrap()
        .into_value();
    assert_eq!(asignados.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn travessia_malformada_e_um_erro_explicito() {
    let state = setup_state().await;
    let residencia = seed_residence(&state, "F-606").await;

    let err = state
        .association_repo
        .get_related("Residence", residencia, "porteiro")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnknownAssociation { .. }), "{err:?}");

    let err = state
        .association_repo
        .get_related("Fantasma", 1, "dueno")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnknownEntity(_)), "{err:?}");

    // Instância de origem inexistente.
    let err = state
        .association_repo
        .get_related("Residence", 999, "dueno")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn deletar_usuario_com_papel_anulavel_anula_o_papel() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;

    let residencia = state
        .residence_repo
        .create_residence("G-707", Some(ana), None, None)
        .await
        .unwrap()
        .id;

    // dueno_id é anulável: o SET NULL do schema limpa o papel.
    state.user_repo.delete_user(ana).await.unwrap();

    let r = state.residence_repo.find_by_id(residencia).await.unwrap().unwrap();
    assert!(r.dueno_id.is_none());
}

#[tokio::test]
async fn deletar_usuario_referenciado_por_fk_obrigatoria_falha() {
    let state = setup_state().await;
    let ana = seed_user(&state, "Ana", "ana@example.com").await;
    let residencia = seed_residence(&state, "H-808").await;

    state
        .report_repo
        .create_report(ReportTipo::Otro, residencia, ana, "t", "d", None)
        .await
        .unwrap();

    // reportado_por_id é RESTRICT: a deleção aborta com IntegrityError.
    let err = state.user_repo.delete_user(ana).await.unwrap_err();
    assert!(matches!(err, AppError::IntegrityError(_)), "{err:?}");

    // O usuário continua lá.
    assert!(state.user_repo.find_by_id(ana).await.unwrap().is_some());
}
