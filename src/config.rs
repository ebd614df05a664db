// src/config.rs

use std::{env, str::FromStr, time::Duration};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::db::{
    ActivityRepository, AmenityRepository, AssociationRepository, ComplaintRepository,
    FinanceRepository, ReportRepository, ResidenceRepository, UserRepository,
};
use crate::services::{DiagnosticsService, MigrationService, ResidenceService};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repo: UserRepository,
    pub residence_repo: ResidenceRepository,
    pub activity_repo: ActivityRepository,
    pub amenity_repo: AmenityRepository,
    pub report_repo: ReportRepository,
    pub complaint_repo: ComplaintRepository,
    pub finance_repo: FinanceRepository,
    pub association_repo: AssociationRepository,
    pub residence_service: ResidenceService,
    pub migration_service: MigrationService,
    pub diagnostics_service: DiagnosticsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://condominio.db".to_string());

        // O pragma de foreign_keys fica SEMPRE ligado: o contrato de
        // integridade referencial depende dele.
        let options = SqliteConnectOptions::from_str(&database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        tracing::info!("Conexão com o banco de dados estabelecida com sucesso");

        Ok(Self::from_pool(db_pool))
    }

    // Monta o gráfico de dependências a partir de uma pool já aberta.
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let residence_repo = ResidenceRepository::new(db_pool.clone());
        let activity_repo = ActivityRepository::new(db_pool.clone());
        let amenity_repo = AmenityRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());
        let complaint_repo = ComplaintRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());
        let association_repo = AssociationRepository::new(db_pool.clone());

        let residence_service = ResidenceService::new(db_pool.clone(), residence_repo.clone());
        let migration_service = MigrationService::new(db_pool.clone(), report_repo.clone());
        let diagnostics_service = DiagnosticsService::new(db_pool.clone());

        Self {
            db_pool,
            user_repo,
            residence_repo,
            activity_repo,
            amenity_repo,
            report_repo,
            complaint_repo,
            finance_repo,
            association_repo,
            residence_service,
            migration_service,
            diagnostics_service,
        }
    }
}
