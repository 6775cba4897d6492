//! Controller do financeiro
//!
//! Contas a receber e a pagar (com ação de baixa), pagamentos de
//! serviço e o resumo do mês corrente. Os dias em atraso das respostas
//! são derivados da data atual.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::finance_dto::{
    AccountFilters, CreatePayableRequest, CreateReceivableRequest, CreateServicePaymentRequest,
    FinanceSummaryResponse, PayAccountRequest, PayableResponse, ReceivableResponse,
    ServicePaymentFilters, ServicePaymentResponse, UpdatePayableRequest, UpdateReceivableRequest,
};
use crate::models::account::{AccountStatus, ExpenseCategory, PaymentMethod};
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::service_order_repository::ServiceOrderRepository;
use crate::repositories::supplier_repository::SupplierRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct FinanceController {
    repository: AccountRepository,
    clients: ClientRepository,
    suppliers: SupplierRepository,
    orders: ServiceOrderRepository,
}

impl FinanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AccountRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            suppliers: SupplierRepository::new(pool.clone()),
            orders: ServiceOrderRepository::new(pool),
        }
    }

    fn hoje() -> NaiveDate {
        Utc::now().date_naive()
    }

    fn check_valor(valor: Decimal) -> AppResult<()> {
        if valor <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Valor deve ser maior que zero".to_string(),
            ));
        }
        Ok(())
    }

    // --- Contas a receber ---

    pub async fn create_receivable(
        &self,
        request: CreateReceivableRequest,
    ) -> AppResult<ApiResponse<ReceivableResponse>> {
        request.validate()?;
        Self::check_valor(request.valor)?;

        let status = parse_status(request.status.as_deref())?
            .unwrap_or(AccountStatus::Open)
            .as_str()
            .to_string();

        if self.clients.find_by_id(request.cliente_id).await?.is_none() {
            return Err(AppError::NotFound("Cliente não encontrado".to_string()));
        }

        if let Some(servico_id) = request.servico_id {
            if self.orders.find_by_id(servico_id).await?.is_none() {
                return Err(AppError::NotFound("Serviço não encontrado".to_string()));
            }
        }

        let conta = self
            .repository
            .create_receivable(
                request.servico_id,
                request.cliente_id,
                request.valor,
                request.data_vencimento,
                request.data_pagamento,
                status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ReceivableResponse::from_model(conta, Self::hoje()),
            "Conta a receber criada com sucesso!".to_string(),
        ))
    }

    pub async fn get_receivable(&self, id: Uuid) -> AppResult<ReceivableResponse> {
        let conta = self
            .repository
            .find_receivable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada".to_string()))?;

        Ok(ReceivableResponse::from_model(conta, Self::hoje()))
    }

    pub async fn list_receivables(
        &self,
        filters: AccountFilters,
    ) -> AppResult<Vec<ReceivableResponse>> {
        validate_status_filter(filters.status.as_deref())?;

        let hoje = Self::hoje();
        let contas = self.repository.list_receivables(&filters, hoje).await?;

        Ok(contas
            .into_iter()
            .map(|c| ReceivableResponse::from_model(c, hoje))
            .collect())
    }

    pub async fn update_receivable(
        &self,
        id: Uuid,
        request: UpdateReceivableRequest,
    ) -> AppResult<ApiResponse<ReceivableResponse>> {
        request.validate()?;
        if let Some(valor) = request.valor {
            Self::check_valor(valor)?;
        }

        let status = parse_status(request.status.as_deref())?.map(|s| s.as_str().to_string());

        if let Some(cliente_id) = request.cliente_id {
            if self.clients.find_by_id(cliente_id).await?.is_none() {
                return Err(AppError::NotFound("Cliente não encontrado".to_string()));
            }
        }

        let conta = self
            .repository
            .update_receivable(
                id,
                request.servico_id,
                request.cliente_id,
                request.valor,
                request.data_vencimento,
                request.data_pagamento,
                status,
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            ReceivableResponse::from_model(conta, Self::hoje()),
            "Conta a receber atualizada com sucesso!".to_string(),
        ))
    }

    /// Dá baixa na conta a receber
    pub async fn pay_receivable(
        &self,
        id: Uuid,
        request: PayAccountRequest,
    ) -> AppResult<ApiResponse<ReceivableResponse>> {
        let hoje = Self::hoje();
        let data_pagamento = request.data_pagamento.unwrap_or(hoje);

        let conta = self
            .repository
            .pay_receivable(id, data_pagamento)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a receber não encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            ReceivableResponse::from_model(conta, hoje),
            "Conta recebida com sucesso!".to_string(),
        ))
    }

    pub async fn delete_receivable(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete_receivable(id).await? {
            return Err(AppError::NotFound(
                "Conta a receber não encontrada".to_string(),
            ));
        }

        Ok(())
    }

    // --- Contas a pagar ---

    pub async fn create_payable(
        &self,
        request: CreatePayableRequest,
    ) -> AppResult<ApiResponse<PayableResponse>> {
        request.validate()?;
        Self::check_valor(request.valor)?;

        let status = parse_status(request.status.as_deref())?
            .unwrap_or(AccountStatus::Open)
            .as_str()
            .to_string();
        let categoria = parse_categoria(request.categoria.as_deref())?
            .unwrap_or(ExpenseCategory::Other)
            .as_str()
            .to_string();

        if let Some(fornecedor_id) = request.fornecedor_id {
            if self.suppliers.find_by_id(fornecedor_id).await?.is_none() {
                return Err(AppError::NotFound("Fornecedor não encontrado".to_string()));
            }
        }

        let conta = self
            .repository
            .create_payable(
                request.fornecedor_id,
                request.descricao,
                request.valor,
                request.data_vencimento,
                request.data_pagamento,
                status,
                categoria,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PayableResponse::from_model(conta, Self::hoje()),
            "Conta a pagar criada com sucesso!".to_string(),
        ))
    }

    pub async fn get_payable(&self, id: Uuid) -> AppResult<PayableResponse> {
        let conta = self
            .repository
            .find_payable(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada".to_string()))?;

        Ok(PayableResponse::from_model(conta, Self::hoje()))
    }

    pub async fn list_payables(&self, filters: AccountFilters) -> AppResult<Vec<PayableResponse>> {
        validate_status_filter(filters.status.as_deref())?;

        let hoje = Self::hoje();
        let contas = self.repository.list_payables(&filters, hoje).await?;

        Ok(contas
            .into_iter()
            .map(|c| PayableResponse::from_model(c, hoje))
            .collect())
    }

    pub async fn update_payable(
        &self,
        id: Uuid,
        request: UpdatePayableRequest,
    ) -> AppResult<ApiResponse<PayableResponse>> {
        request.validate()?;
        if let Some(valor) = request.valor {
            Self::check_valor(valor)?;
        }

        let status = parse_status(request.status.as_deref())?.map(|s| s.as_str().to_string());
        let categoria =
            parse_categoria(request.categoria.as_deref())?.map(|c| c.as_str().to_string());

        if let Some(fornecedor_id) = request.fornecedor_id {
            if self.suppliers.find_by_id(fornecedor_id).await?.is_none() {
                return Err(AppError::NotFound("Fornecedor não encontrado".to_string()));
            }
        }

        let conta = self
            .repository
            .update_payable(
                id,
                request.fornecedor_id,
                request.descricao,
                request.valor,
                request.data_vencimento,
                request.data_pagamento,
                status,
                categoria,
                request.active,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            PayableResponse::from_model(conta, Self::hoje()),
            "Conta a pagar atualizada com sucesso!".to_string(),
        ))
    }

    /// Dá baixa na conta a pagar
    pub async fn pay_payable(
        &self,
        id: Uuid,
        request: PayAccountRequest,
    ) -> AppResult<ApiResponse<PayableResponse>> {
        let hoje = Self::hoje();
        let data_pagamento = request.data_pagamento.unwrap_or(hoje);

        let conta = self
            .repository
            .pay_payable(id, data_pagamento)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            PayableResponse::from_model(conta, hoje),
            "Conta paga com sucesso!".to_string(),
        ))
    }

    pub async fn delete_payable(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete_payable(id).await? {
            return Err(AppError::NotFound(
                "Conta a pagar não encontrada".to_string(),
            ));
        }

        Ok(())
    }

    // --- Pagamentos de serviço ---

    pub async fn create_payment(
        &self,
        request: CreateServicePaymentRequest,
    ) -> AppResult<ApiResponse<ServicePaymentResponse>> {
        request.validate()?;
        Self::check_valor(request.valor)?;

        if PaymentMethod::parse(&request.forma_pagamento).is_none() {
            return Err(AppError::BadRequest(format!(
                "Forma de pagamento inválida: {}",
                request.forma_pagamento
            )));
        }

        if self.orders.find_by_id(request.servico_id).await?.is_none() {
            return Err(AppError::NotFound("Serviço não encontrado".to_string()));
        }

        let pagamento = self
            .repository
            .create_payment(
                request.servico_id,
                request.forma_pagamento,
                request.valor,
                request.data.unwrap_or_else(Self::hoje),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            pagamento.into(),
            "Pagamento registrado com sucesso!".to_string(),
        ))
    }

    pub async fn list_payments(
        &self,
        filters: ServicePaymentFilters,
    ) -> AppResult<Vec<ServicePaymentResponse>> {
        let pagamentos = self.repository.list_payments(&filters).await?;

        Ok(pagamentos
            .into_iter()
            .map(ServicePaymentResponse::from)
            .collect())
    }

    // --- Resumo ---

    /// Resumo financeiro do mês corrente
    pub async fn summary(&self) -> AppResult<FinanceSummaryResponse> {
        let resumo = self.repository.finance_summary(Self::hoje()).await?;

        let saldo_mes = resumo.total_recebido_mes - resumo.total_pago_mes;

        Ok(FinanceSummaryResponse {
            total_receber: resumo.total_receber,
            total_recebido_mes: resumo.total_recebido_mes,
            contas_vencidas_receber: resumo.contas_vencidas_receber,
            total_pagar: resumo.total_pagar,
            total_pago_mes: resumo.total_pago_mes,
            contas_vencidas_pagar: resumo.contas_vencidas_pagar,
            saldo_mes,
        })
    }
}

fn parse_status(value: Option<&str>) -> AppResult<Option<AccountStatus>> {
    match value {
        None => Ok(None),
        Some(raw) => AccountStatus::parse(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Status de conta inválido: {}", raw))),
    }
}

fn parse_categoria(value: Option<&str>) -> AppResult<Option<ExpenseCategory>> {
    match value {
        None => Ok(None),
        Some(raw) => ExpenseCategory::parse(raw).map(Some).ok_or_else(|| {
            AppError::BadRequest(format!("Categoria de despesa inválida: {}", raw))
        }),
    }
}

fn validate_status_filter(value: Option<&str>) -> AppResult<()> {
    if let Some(status) = value.filter(|s| !s.is_empty()) {
        if AccountStatus::parse(status).is_none() {
            return Err(AppError::BadRequest(format!(
                "Status de conta inválido: {}",
                status
            )));
        }
    }
    Ok(())
}
