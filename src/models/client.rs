//! Modelo de Cliente
//!
//! Este módulo contém o struct Cliente que mapeia a tabela `clientes`.
//! O CPF/CNPJ é único e armazenado sem máscara (11 ou 14 dígitos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cliente da oficina - mapeia a tabela clientes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub nome: String,
    pub cpf_cnpj: String,
    pub email: Option<String>,
    pub telefone: String,
    pub endereco: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
