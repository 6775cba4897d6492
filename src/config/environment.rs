//! Configuração de variáveis de ambiente
//!
//! Este módulo carrega a configuração do servidor a partir do ambiente.

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub viacep_base_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            viacep_base_url: env::var("VIACEP_BASE_URL")
                .unwrap_or_else(|_| "https://viacep.com.br/ws".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verifica se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verifica se estamos em modo produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Endereço de bind do servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
