// tests/common/mod.rs

// Nem todo binário de teste usa todos os helpers.
#![allow(dead_code)]

use std::str::FromStr;

use condominio_backend::MIGRATOR;
use condominio_backend::config::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

// Banco em memória com uma única conexão viva: bancos :memory: distintos
// por conexão quebrariam os testes.
pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub async fn setup_state() -> AppState {
    AppState::from_pool(setup_pool().await)
}

pub async fn seed_user(state: &AppState, nombre: &str, email: &str) -> i64 {
    state
        .user_repo
        .create_user(nombre, email, "hash-de-teste", None)
        .await
        .unwrap()
        .id
}

pub async fn seed_residence(state: &AppState, codigo: &str) -> i64 {
    state
        .residence_repo
        .create_residence(codigo, None, None, None)
        .await
        .unwrap()
        .id
}
