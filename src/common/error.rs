use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A camada HTTP traduz cada variante em um status code; nada é engolido.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Identificador ausente: reportado, não fatal.
    #[error("{0} não encontrado")]
    NotFound(&'static str),

    // FK apontando para linha inexistente ou violação de chave única.
    // Aborta só a operação em questão.
    #[error("Violação de integridade: {0}")]
    IntegrityError(String),

    // Travessia malformada: entidade ou papel que não existem no grafo.
    #[error("Entidade desconhecida: {0}")]
    UnknownEntity(String),

    #[error("Associação desconhecida: {entity}.{role}")]
    UnknownAssociation { entity: String, role: String },

    // Falha no meio da migração: a transação inteira foi desfeita.
    // Seguro reinvocar, a reescrita é idempotente.
    #[error("Falha na transação de migração: {0}")]
    TransactionError(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo por campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::NotFound(entity) => {
                let body = Json(json!({ "error": format!("{entity} não encontrado.") }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            AppError::IntegrityError(detail) => {
                let body = Json(json!({ "error": detail }));
                return (StatusCode::CONFLICT, body).into_response();
            }
            AppError::UnknownEntity(name) => {
                let body = Json(json!({ "error": format!("Entidade desconhecida: {name}") }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UnknownAssociation { entity, role } => {
                let body = Json(json!({
                    "error": format!("Associação desconhecida: {entity}.{role}")
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::TransactionError(ref detail) => {
                tracing::error!("Migração desfeita (rollback): {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "A migração falhou e foi desfeita.")
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
