// src/db/user_repo.rs

use sqlx::SqlitePool;

use crate::common::db_utils::map_integrity;
use crate::common::error::AppError;
use crate::models::user::{User, UserRole};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Cria um novo usuário. E-mail duplicado vira IntegrityError.
    pub async fn create_user(
        &self,
        nombre: &str,
        email: &str,
        password_hash: &str,
        rol: Option<UserRole>,
    ) -> Result<User, AppError> {
        // Definindo padrão caso venha nulo
        let rol_final = rol.unwrap_or(UserRole::Residente);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (nombre, email, password_hash, rol)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(email)
        .bind(password_hash)
        .bind(rol_final)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "users"))?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    // Atualização parcial: só os campos presentes são reescritos.
    pub async fn update_user(
        &self,
        id: i64,
        nombre: Option<&str>,
        email: Option<&str>,
        rol: Option<UserRole>,
    ) -> Result<User, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET nombre     = COALESCE(?2, nombre),
                email      = COALESCE(?3, email),
                rol        = COALESCE(?4, rol),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(email)
        .bind(rol)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_integrity(e, "users"))?;

        maybe_user.ok_or(AppError::NotFound("Usuário"))
    }

    // Deleção dura. Se o usuário ainda é referenciado por uma FK obrigatória
    // (reportes, quejas, pagos...), o RESTRICT do schema vira IntegrityError.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_integrity(e, "users"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuário"));
        }
        Ok(())
    }
}
