//! Controller de Serviços
//!
//! Garante a relação um-para-um com agendamentos e delega ao
//! repositório a escrita transacional dos itens de orçamento.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::service_order_dto::{
    CreateEstimateItemRequest, CreateServiceOrderRequest, EstimateItemResponse,
    ServiceOrderFilters, ServiceOrderResponse, UpdateEstimateItemRequest,
    UpdateServiceOrderRequest,
};
use crate::models::service_order::ServiceStatus;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::service_order_repository::ServiceOrderRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct ServiceOrderController {
    repository: ServiceOrderRepository,
    appointments: AppointmentRepository,
}

impl ServiceOrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceOrderRepository::new(pool.clone()),
            appointments: AppointmentRepository::new(pool),
        }
    }

    fn check_non_negative(campo: &str, valor: Decimal) -> AppResult<()> {
        if valor < Decimal::ZERO {
            return Err(AppError::BadRequest(format!(
                "{} não pode ser negativo",
                campo
            )));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateServiceOrderRequest,
    ) -> AppResult<ApiResponse<ServiceOrderResponse>> {
        request.validate()?;

        let status = parse_status(request.status.as_deref())?
            .unwrap_or(ServiceStatus::Estimate)
            .as_str()
            .to_string();

        if let Some(preco) = request.preco_mao_obra {
            Self::check_non_negative("Preço de mão de obra", preco)?;
        }
        if let Some(desconto) = request.desconto {
            Self::check_non_negative("Desconto", desconto)?;
        }

        if self
            .appointments
            .find_by_id(request.agendamento_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Agendamento não encontrado".to_string()));
        }

        if self
            .repository
            .exists_for_appointment(request.agendamento_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Este agendamento já possui um serviço".to_string(),
            ));
        }

        let order = self
            .repository
            .create(
                request.agendamento_id,
                request.started_at,
                request.finished_at,
                request.descricao_trabalho,
                request.preco_mao_obra.unwrap_or(Decimal::ZERO),
                request.desconto.unwrap_or(Decimal::ZERO),
                status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            order.into(),
            "Serviço criado com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ServiceOrderResponse> {
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Serviço não encontrado".to_string()))?;

        Ok(order.into())
    }

    pub async fn list(&self, filters: ServiceOrderFilters) -> AppResult<Vec<ServiceOrderResponse>> {
        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            if ServiceStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Status de serviço inválido: {}",
                    status
                )));
            }
        }

        let orders = self.repository.list(&filters).await?;

        Ok(orders.into_iter().map(ServiceOrderResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceOrderRequest,
    ) -> AppResult<ApiResponse<ServiceOrderResponse>> {
        request.validate()?;

        let status = parse_status(request.status.as_deref())?.map(|s| s.as_str().to_string());

        if let Some(preco) = request.preco_mao_obra {
            Self::check_non_negative("Preço de mão de obra", preco)?;
        }
        if let Some(desconto) = request.desconto {
            Self::check_non_negative("Desconto", desconto)?;
        }

        let order = self
            .repository
            .update(
                id,
                request.started_at,
                request.finished_at,
                request.descricao_trabalho,
                request.preco_mao_obra,
                request.desconto,
                status,
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Serviço não encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            order.into(),
            "Serviço atualizado com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Serviço não encontrado".to_string()));
        }

        Ok(())
    }

    // --- Itens de orçamento ---

    pub async fn list_items(&self, servico_id: Uuid) -> AppResult<Vec<EstimateItemResponse>> {
        if self.repository.find_by_id(servico_id).await?.is_none() {
            return Err(AppError::NotFound("Serviço não encontrado".to_string()));
        }

        let items = self.repository.list_items(servico_id).await?;

        Ok(items.into_iter().map(EstimateItemResponse::from).collect())
    }

    pub async fn create_item(
        &self,
        servico_id: Uuid,
        request: CreateEstimateItemRequest,
    ) -> AppResult<ApiResponse<EstimateItemResponse>> {
        request.validate()?;
        Self::check_non_negative("Valor unitário", request.valor_unitario)?;

        if self.repository.find_by_id(servico_id).await?.is_none() {
            return Err(AppError::NotFound("Serviço não encontrado".to_string()));
        }

        let item = self
            .repository
            .create_item(
                servico_id,
                request.item,
                request.quantidade,
                request.valor_unitario,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            item.into(),
            "Item adicionado ao orçamento com sucesso!".to_string(),
        ))
    }

    pub async fn update_item(
        &self,
        item_id: Uuid,
        request: UpdateEstimateItemRequest,
    ) -> AppResult<ApiResponse<EstimateItemResponse>> {
        request.validate()?;
        if let Some(valor) = request.valor_unitario {
            Self::check_non_negative("Valor unitário", valor)?;
        }

        let item = self
            .repository
            .update_item(
                item_id,
                request.item,
                request.quantidade,
                request.valor_unitario,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Item de orçamento não encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            item.into(),
            "Item de orçamento atualizado com sucesso!".to_string(),
        ))
    }

    pub async fn delete_item(&self, item_id: Uuid) -> AppResult<()> {
        if !self.repository.delete_item(item_id).await? {
            return Err(AppError::NotFound(
                "Item de orçamento não encontrado".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_status(value: Option<&str>) -> AppResult<Option<ServiceStatus>> {
    match value {
        None => Ok(None),
        Some(raw) => ServiceStatus::parse(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Status de serviço inválido: {}", raw))),
    }
}
