//! DTOs de Serviço e itens de orçamento

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service_order::{EstimateItem, ServiceOrder};

/// Request para criar um serviço a partir de um agendamento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceOrderRequest {
    pub agendamento_id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub descricao_trabalho: Option<String>,
    pub preco_mao_obra: Option<Decimal>,
    pub desconto: Option<Decimal>,
    pub status: Option<String>,
}

/// Request para atualizar um serviço
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceOrderRequest {
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub descricao_trabalho: Option<String>,
    pub preco_mao_obra: Option<Decimal>,
    pub desconto: Option<Decimal>,
    pub status: Option<String>,
    pub active: Option<bool>,
}

/// Request para criar um item de orçamento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEstimateItemRequest {
    #[validate(length(min = 1, max = 200))]
    pub item: String,

    #[validate(range(min = 1))]
    pub quantidade: i32,

    pub valor_unitario: Decimal,
}

/// Request para atualizar um item de orçamento
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEstimateItemRequest {
    #[validate(length(min = 1, max = 200))]
    pub item: Option<String>,

    #[validate(range(min = 1))]
    pub quantidade: Option<i32>,

    pub valor_unitario: Option<Decimal>,
}

/// Filtros de listagem de serviços
#[derive(Debug, Default, Deserialize)]
pub struct ServiceOrderFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de serviço
#[derive(Debug, Serialize)]
pub struct ServiceOrderResponse {
    pub id: Uuid,
    pub agendamento_id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub descricao_trabalho: Option<String>,
    pub preco_mao_obra: Decimal,
    pub desconto: Decimal,
    pub valor_total: Decimal,
    pub status: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceOrder> for ServiceOrderResponse {
    fn from(order: ServiceOrder) -> Self {
        Self {
            id: order.id,
            agendamento_id: order.agendamento_id,
            started_at: order.started_at,
            finished_at: order.finished_at,
            descricao_trabalho: order.descricao_trabalho,
            preco_mao_obra: order.preco_mao_obra,
            desconto: order.desconto,
            valor_total: order.valor_total,
            status: order.status,
            active: order.active,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Response de item de orçamento
#[derive(Debug, Serialize)]
pub struct EstimateItemResponse {
    pub id: Uuid,
    pub servico_id: Uuid,
    pub item: String,
    pub quantidade: i32,
    pub valor_unitario: Decimal,
    pub subtotal: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EstimateItem> for EstimateItemResponse {
    fn from(item: EstimateItem) -> Self {
        Self {
            id: item.id,
            servico_id: item.servico_id,
            item: item.item,
            quantidade: item.quantidade,
            valor_unitario: item.valor_unitario,
            subtotal: item.subtotal,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
