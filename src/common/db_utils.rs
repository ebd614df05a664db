use crate::common::error::AppError;

// ---
// Helper de integridade: traduz violações do driver em AppError
// ---
// Violações de FK e de chave única viram `IntegrityError`; o resto segue
// como `DatabaseError` pelo caminho normal do `?`.
pub(crate) fn map_integrity(err: sqlx::Error, contexto: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AppError::IntegrityError(format!(
                "{contexto}: chave estrangeira aponta para registro inexistente ou ainda referenciado"
            ));
        }
        if db_err.is_unique_violation() {
            return AppError::IntegrityError(format!("{contexto}: valor duplicado em campo único"));
        }
    }
    err.into()
}
