//! Estado compartilhado da aplicação
//!
//! Este módulo define o estado que é passado através do router do Axum.

use reqwest::Client;
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            http_client: Client::new(),
        }
    }
}
