// tests/crud_tests.rs

mod common;

use chrono::{NaiveDate, NaiveTime, Utc};
use common::{seed_residence, seed_user, setup_state};
use condominio_backend::common::error::AppError;
use condominio_backend::models::amenity::ReservationStatus;
use condominio_backend::models::report::{ReportEstado, ReportPrioridad, ReportTipo};
use condominio_backend::models::user::UserRole;

#[tokio::test]
async fn usuario_criado_sem_rol_vira_residente() {
    let state = setup_state().await;

    let user = state
        .user_repo
        .create_user("Ana", "ana@example.com", "hash", None)
        .await
        .unwrap();

    assert_eq!(user.rol, UserRole::Residente);
    assert_eq!(user.nombre, "Ana");
}

#[tokio::test]
async fn email_duplicado_vira_erro_de_integridade() {
    let state = setup_state().await;
    seed_user(&state, "Ana", "ana@example.com").await;

    let err = state
        .user_repo
        .create_user("Outra Ana", "ana@example.com", "hash", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::IntegrityError(_)), "{err:?}");
}

#[tokio::test]
async fn atualizacao_parcial_nao_toca_nos_outros_campos() {
    let state = setup_state().await;
    let id = seed_user(&state, "Ana", "ana@example.com").await;

    let user = state
        .user_repo
        .update_user(id, Some("Ana María"), None, None)
        .await
        .unwrap();

    assert_eq!(user.nombre, "Ana María");
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.rol, UserRole::Residente);
}

#[tokio::test]
async fn operacoes_sobre_id_inexistente_viram_not_found() {
    let state = setup_state().await;

    assert!(state.user_repo.find_by_id(999).await.unwrap().is_none());

    let err = state.user_repo.delete_user(999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = state
        .user_repo
        .update_user(999, Some("X"), None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn reporte_sem_prioridad_nasce_media_e_abierto() {
    let state = setup_state().await;
    let usuario = seed_user(&state, "Ana", "ana@example.com").await;
    let residencia = seed_residence(&state, "A-101").await;

    let report = state
        .report_repo
        .create_report(
            ReportTipo::Seguridad,
            residencia,
            usuario,
            "Portão aberto",
            "O portão da garagem ficou aberto",
            None,
        )
        .await
        .unwrap();

    assert_eq!(report.tipo, ReportTipo::Seguridad);
    assert_eq!(report.prioridad, ReportPrioridad::Media);
    assert_eq!(report.estado, ReportEstado::Abierto);
    assert!(report.asignado_a.is_none());
    assert!(report.fecha_resolucion.is_none());
}

#[tokio::test]
async fn enums_do_reporte_fazem_round_trip_pelo_banco() {
    let state = setup_state().await;
    let usuario = seed_user(&state, "Ana", "ana@example.com").await;
    let residencia = seed_residence(&state, "A-101").await;

    let created = state
        .report_repo
        .create_report(
            ReportTipo::Instalaciones,
            residencia,
            usuario,
            "Vazamento",
            "Cano estourado no 2º andar",
            Some(ReportPrioridad::Critica),
        )
        .await
        .unwrap();

    let updated = state
        .report_repo
        .update_report(
            created.id,
            None,
            None,
            None,
            Some(ReportEstado::EnProgreso),
            Some(usuario),
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(updated.prioridad, ReportPrioridad::Critica);
    assert_eq!(updated.estado, ReportEstado::EnProgreso);
    assert_eq!(updated.asignado_a, Some(usuario));

    // Relido do banco, os literais com acento e espaço continuam intactos.
    let (prioridad, estado): (String, String) =
        sqlx::query_as("SELECT prioridad, estado FROM reports WHERE id = ?1")
            .bind(created.id)
            .fetch_one(&state.db_pool)
            .await
            .unwrap();
    assert_eq!(prioridad, "Crítica");
    assert_eq!(estado, "En Progreso");
}

#[tokio::test]
async fn reserva_criada_e_recuperavel_por_id() {
    let state = setup_state().await;
    let usuario = seed_user(&state, "Ana", "ana@example.com").await;

    let amenidad = state
        .amenity_repo
        .create_amenity(
            "Piscina",
            None,
            20,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        )
        .await
        .unwrap();

    let reserva = state
        .amenity_repo
        .create_reservation(amenidad.id, usuario, Utc::now(), None)
        .await
        .unwrap();
    assert_eq!(reserva.estado, ReservationStatus::Pendiente);

    let relida = state
        .amenity_repo
        .find_reservation(reserva.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(relida.id, reserva.id);
    assert_eq!(relida.amenidad_id, amenidad.id);
    assert_eq!(relida.usuario_id, usuario);

    assert!(state.amenity_repo.find_reservation(999).await.unwrap().is_none());
}

#[tokio::test]
async fn atualizacao_com_campos_ausentes_preserva_resolucao_e_notas() {
    let state = setup_state().await;
    let usuario = seed_user(&state, "Ana", "ana@example.com").await;
    let residencia = seed_residence(&state, "A-101").await;

    let created = state
        .report_repo
        .create_report(ReportTipo::Otro, residencia, usuario, "t", "d", None)
        .await
        .unwrap();

    let resuelto = state
        .report_repo
        .update_report(
            created.id,
            None,
            None,
            None,
            Some(ReportEstado::Resuelto),
            None,
            Some(Utc::now()),
            Some("verificado no local"),
        )
        .await
        .unwrap();
    assert!(resuelto.fecha_resolucion.is_some());

    // Um update que só mexe no título não apaga resolução nem notas.
    let retitulado = state
        .report_repo
        .update_report(created.id, Some("t2"), None, None, None, None, None, None)
        .await
        .unwrap();
    assert_eq!(retitulado.titulo, "t2");
    assert_eq!(retitulado.fecha_resolucion, resuelto.fecha_resolucion);
    assert_eq!(retitulado.notas_adicionales.as_deref(), Some("verificado no local"));
}

#[tokio::test]
async fn pagamento_exige_costo_existente() {
    let state = setup_state().await;
    let usuario = seed_user(&state, "Ana", "ana@example.com").await;

    let err = state
        .finance_repo
        .create_payment(
            usuario,
            999,
            150.0,
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::IntegrityError(_)), "{err:?}");
}

#[tokio::test]
async fn fluxo_costo_pagamento_completo() {
    let state = setup_state().await;
    let usuario = seed_user(&state, "Ana", "ana@example.com").await;
    let residencia = seed_residence(&state, "A-101").await;

    let costo = state
        .finance_repo
        .create_service_cost(residencia, 320.5, "2026-08")
        .await
        .unwrap();

    let pago = state
        .finance_repo
        .create_payment(
            usuario,
            costo.id,
            320.5,
            NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(pago.servicio_costo_id, costo.id);
    assert_eq!(pago.monto, 320.5);

    // O costo ainda tem pagamento: deletar deve falhar por RESTRICT.
    let err = state.finance_repo.delete_service_cost(costo.id).await.unwrap_err();
    assert!(matches!(err, AppError::IntegrityError(_)), "{err:?}");

    state.finance_repo.delete_payment(pago.id).await.unwrap();
    state.finance_repo.delete_service_cost(costo.id).await.unwrap();
}

#[tokio::test]
async fn estatisticas_de_reportes() {
    let state = setup_state().await;
    let usuario = seed_user(&state, "Ana", "ana@example.com").await;
    let residencia = seed_residence(&state, "A-101").await;

    for (tipo, prioridad) in [
        (ReportTipo::Seguridad, Some(ReportPrioridad::Critica)),
        (ReportTipo::Seguridad, Some(ReportPrioridad::Alta)),
        (ReportTipo::Limpieza, None),
    ] {
        state
            .report_repo
            .create_report(tipo, residencia, usuario, "t", "d", prioridad)
            .await
            .unwrap();
    }

    let stats = state.report_repo.statistics().await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.by_status.abierto, 3);
    assert_eq!(stats.by_status.cerrado, 0);
    assert_eq!(stats.by_priority.critica, 1);
    assert_eq!(stats.by_priority.alta, 1);

    let seguridad = stats
        .by_type
        .iter()
        .find(|t| t.tipo == "Seguridad")
        .unwrap();
    assert_eq!(seguridad.count, 2);
}
