//! Controller de Veículos
//!
//! Valida placa (formato antigo ou Mercosul), garante unicidade e
//! confere que o cliente dono existe antes de gravar.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    repository: VehicleRepository,
    clients: ClientRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let placa = request.placa.trim().to_uppercase();
        let status = parse_status(request.status.as_deref())?
            .unwrap_or(VehicleStatus::InUse)
            .as_str()
            .to_string();

        if self.clients.find_by_id(request.cliente_id).await?.is_none() {
            return Err(AppError::NotFound("Cliente não encontrado".to_string()));
        }

        if self.repository.placa_exists(&placa, None).await? {
            return Err(AppError::Conflict(
                "Já existe um veículo com esta placa".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                request.cliente_id,
                placa,
                request.marca,
                request.modelo,
                request.ano,
                request.cor,
                request.chassis,
                status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Veículo criado com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self, filters: VehicleFilters) -> AppResult<Vec<VehicleResponse>> {
        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            if VehicleStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Status de veículo inválido: {}",
                    status
                )));
            }
        }

        let vehicles = self.repository.list(&filters).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let placa = request.placa.map(|p| p.trim().to_uppercase());
        let status = parse_status(request.status.as_deref())?.map(|s| s.as_str().to_string());

        if let Some(cliente_id) = request.cliente_id {
            if self.clients.find_by_id(cliente_id).await?.is_none() {
                return Err(AppError::NotFound("Cliente não encontrado".to_string()));
            }
        }

        if let Some(ref placa) = placa {
            if self.repository.placa_exists(placa, Some(id)).await? {
                return Err(AppError::Conflict(
                    "Já existe um veículo com esta placa".to_string(),
                ));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.cliente_id,
                placa,
                request.marca,
                request.modelo,
                request.ano,
                request.cor,
                request.chassis,
                status,
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Veículo atualizado com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Veículo não encontrado".to_string()));
        }

        Ok(())
    }
}

fn parse_status(value: Option<&str>) -> AppResult<Option<VehicleStatus>> {
    match value {
        None => Ok(None),
        Some(raw) => VehicleStatus::parse(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Status de veículo inválido: {}", raw))),
    }
}
