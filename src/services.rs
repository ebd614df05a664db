pub mod migration_service;
pub use migration_service::MigrationService;
pub mod residence_service;
pub use residence_service::ResidenceService;
pub mod diagnostics_service;
pub use diagnostics_service::DiagnosticsService;
