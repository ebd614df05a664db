// src/main.rs

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use condominio_backend::{MIGRATOR, config::AppState, handlers};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    MIGRATOR
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("Migrações do banco de dados executadas com sucesso");

    let user_routes = Router::new()
        .route("/", post(handlers::users::create_user).get(handlers::users::list_users))
        .route(
            "/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        );

    let residence_routes = Router::new()
        .route(
            "/",
            post(handlers::residences::create_residence).get(handlers::residences::list_residences),
        )
        .route(
            "/{id}",
            get(handlers::residences::get_residence)
                .put(handlers::residences::update_residence)
                .delete(handlers::residences::delete_residence),
        )
        // Os três papéis são endereçáveis individualmente, sem ambiguidade.
        .route(
            "/{id}/dueno",
            get(handlers::residences::get_dueno).put(handlers::residences::set_dueno),
        )
        .route(
            "/{id}/residente-actual",
            get(handlers::residences::get_residente_actual)
                .put(handlers::residences::set_residente_actual),
        )
        .route(
            "/{id}/administrador",
            get(handlers::residences::get_administrador)
                .put(handlers::residences::set_administrador),
        )
        .route("/{id}/reasignar", post(handlers::residences::reassign_residente))
        .route("/{id}/historial", get(handlers::residences::list_history));

    let activity_routes = Router::new()
        .route(
            "/",
            post(handlers::activities::create_activity).get(handlers::activities::list_activities),
        )
        .route(
            "/{id}",
            get(handlers::activities::get_activity)
                .put(handlers::activities::update_activity)
                .delete(handlers::activities::delete_activity),
        );

    let amenity_routes = Router::new()
        .route(
            "/",
            post(handlers::amenities::create_amenity).get(handlers::amenities::list_amenities),
        )
        .route(
            "/{id}",
            get(handlers::amenities::get_amenity)
                .put(handlers::amenities::update_amenity)
                .delete(handlers::amenities::delete_amenity),
        )
        .route(
            "/{id}/reservas",
            post(handlers::amenities::create_reservation)
                .get(handlers::amenities::list_reservations),
        );

    let reservation_routes = Router::new().route(
        "/{id}",
        get(handlers::amenities::get_reservation)
            .put(handlers::amenities::update_reservation)
            .delete(handlers::amenities::delete_reservation),
    );

    let report_routes = Router::new()
        .route(
            "/",
            post(handlers::reports::create_report).get(handlers::reports::list_reports),
        )
        .route("/estadisticas", get(handlers::reports::statistics))
        .route(
            "/{id}",
            get(handlers::reports::get_report)
                .put(handlers::reports::update_report)
                .delete(handlers::reports::delete_report),
        )
        .route(
            "/{id}/asignacion",
            axum::routing::delete(handlers::reports::unassign_report),
        );

    let complaint_routes = Router::new()
        .route(
            "/",
            post(handlers::complaints::create_complaint).get(handlers::complaints::list_complaints),
        )
        .route(
            "/{id}",
            get(handlers::complaints::get_complaint)
                .put(handlers::complaints::update_complaint)
                .delete(handlers::complaints::delete_complaint),
        );

    let cost_routes = Router::new()
        .route(
            "/",
            post(handlers::finance::create_service_cost).get(handlers::finance::list_service_costs),
        )
        .route(
            "/{id}",
            get(handlers::finance::get_service_cost)
                .put(handlers::finance::update_service_cost)
                .delete(handlers::finance::delete_service_cost),
        );

    let payment_routes = Router::new()
        .route(
            "/",
            post(handlers::finance::create_payment).get(handlers::finance::list_payments),
        )
        .route(
            "/{id}",
            get(handlers::finance::get_payment)
                .put(handlers::finance::update_payment)
                .delete(handlers::finance::delete_payment),
        );

    let admin_routes = Router::new()
        .route("/esquema", get(handlers::admin::schema))
        .route("/verificar", get(handlers::admin::verify))
        .route("/migrar-tipos-reportes", post(handlers::admin::migrate_report_tipos));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/usuarios", user_routes)
        .nest("/api/residencias", residence_routes)
        .nest("/api/actividades", activity_routes)
        .nest("/api/amenidades", amenity_routes)
        .nest("/api/reservas", reservation_routes)
        .nest("/api/reportes", report_routes)
        .nest("/api/quejas", complaint_routes)
        .nest("/api/costos", cost_routes)
        .nest("/api/pagos", payment_routes)
        .nest("/api/admin", admin_routes)
        .route(
            "/api/asociaciones/{entidad}/{id}/{rol}",
            get(handlers::associations::get_related),
        )
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
