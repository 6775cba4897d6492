//! Conexão com PostgreSQL
//!
//! Este módulo gerencia a conexão com a base de dados e a execução
//! das migrações embutidas.

use anyhow::Result;
use sqlx::PgPool;

use crate::config::database::DatabaseConfig;

/// Conexão com a base de dados
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Abre a conexão usando a configuração padrão (DATABASE_URL)
    pub async fn new_default() -> Result<Self> {
        Self::new(DatabaseConfig::default()).await
    }

    /// Abre a conexão com uma configuração explícita
    pub async fn new(config: DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    /// Pool de conexões
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Executa as migrações embutidas
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
