//! DTOs de Cliente

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::client::Client;
use crate::utils::validation::validate_cpf_cnpj;

/// Request para criar um cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub nome: String,

    #[validate(custom = "validate_cpf_cnpj")]
    pub cpf_cnpj: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub telefone: String,

    #[validate(length(max = 300))]
    pub endereco: Option<String>,

    #[validate(length(max = 100))]
    pub cidade: Option<String>,

    #[validate(length(max = 2))]
    pub estado: Option<String>,

    #[validate(length(max = 10))]
    pub cep: Option<String>,
}

/// Request para atualizar um cliente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,

    #[validate(custom = "validate_cpf_cnpj")]
    pub cpf_cnpj: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub telefone: Option<String>,

    #[validate(length(max = 300))]
    pub endereco: Option<String>,

    #[validate(length(max = 100))]
    pub cidade: Option<String>,

    #[validate(length(max = 2))]
    pub estado: Option<String>,

    #[validate(length(max = 10))]
    pub cep: Option<String>,

    pub active: Option<bool>,
}

/// Filtros de listagem de clientes
#[derive(Debug, Default, Deserialize)]
pub struct ClientFilters {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de cliente. `total_veiculos` só é preenchido no detalhe.
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub nome: String,
    pub cpf_cnpj: String,
    pub email: Option<String>,
    pub telefone: String,
    pub endereco: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_veiculos: Option<i64>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClientResponse {
    pub fn with_vehicle_count(client: Client, total_veiculos: i64) -> Self {
        Self {
            total_veiculos: Some(total_veiculos),
            ..client.into()
        }
    }
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            nome: client.nome,
            cpf_cnpj: client.cpf_cnpj,
            email: client.email,
            telefone: client.telefone,
            endereco: client.endereco,
            cidade: client.cidade,
            estado: client.estado,
            cep: client.cep,
            total_veiculos: None,
            active: client.active,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}
