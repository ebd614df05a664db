// src/lib.rs

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod services;

// Migrações embutidas; o binário roda na inicialização e os testes
// rodam sobre bancos em memória.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
