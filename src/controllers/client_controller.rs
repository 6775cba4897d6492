//! Controller de Clientes
//!
//! Regras de negócio do cadastro de clientes: validação dos campos,
//! unicidade de CPF/CNPJ e normalização das máscaras.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::{
    ClientFilters, ClientResponse, CreateClientRequest, UpdateClientRequest,
};
use crate::dto::common::ApiResponse;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::strip_mask;

pub struct ClientController {
    repository: ClientRepository,
    vehicles: VehicleRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateClientRequest,
    ) -> AppResult<ApiResponse<ClientResponse>> {
        request.validate()?;

        let cpf_cnpj = strip_mask(&request.cpf_cnpj);

        if self.repository.cpf_cnpj_exists(&cpf_cnpj, None).await? {
            return Err(AppError::Conflict(
                "Já existe um cliente com este CPF/CNPJ".to_string(),
            ));
        }

        let client = self
            .repository
            .create(
                request.nome,
                cpf_cnpj,
                request.email,
                request.telefone,
                request.endereco.unwrap_or_default(),
                request.cidade.unwrap_or_default(),
                request.estado.unwrap_or_default(),
                request.cep.map(|c| strip_mask(&c)).unwrap_or_default(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            client.into(),
            "Cliente criado com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ClientResponse> {
        let client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        let total_veiculos = self.vehicles.count_active_for_client(id).await?;

        Ok(ClientResponse::with_vehicle_count(client, total_veiculos))
    }

    pub async fn list(&self, filters: ClientFilters) -> AppResult<Vec<ClientResponse>> {
        let clients = self.repository.list(&filters).await?;

        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateClientRequest,
    ) -> AppResult<ApiResponse<ClientResponse>> {
        request.validate()?;

        let cpf_cnpj = request.cpf_cnpj.map(|c| strip_mask(&c));

        if let Some(ref cpf) = cpf_cnpj {
            if self.repository.cpf_cnpj_exists(cpf, Some(id)).await? {
                return Err(AppError::Conflict(
                    "Já existe um cliente com este CPF/CNPJ".to_string(),
                ));
            }
        }

        let client = self
            .repository
            .update(
                id,
                request.nome,
                cpf_cnpj,
                request.email,
                request.telefone,
                request.endereco,
                request.cidade,
                request.estado,
                request.cep.map(|c| strip_mask(&c)),
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            client.into(),
            "Cliente atualizado com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Cliente não encontrado".to_string()));
        }

        Ok(())
    }
}
