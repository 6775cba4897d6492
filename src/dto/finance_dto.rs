//! DTOs do financeiro: contas a receber, contas a pagar e pagamentos

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::account::{overdue_days, Payable, Receivable, ServicePayment};

/// Request para criar uma conta a receber
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReceivableRequest {
    pub servico_id: Option<Uuid>,
    pub cliente_id: Uuid,
    pub valor: Decimal,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Request para atualizar uma conta a receber
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReceivableRequest {
    pub servico_id: Option<Uuid>,
    pub cliente_id: Option<Uuid>,
    pub valor: Option<Decimal>,
    pub data_vencimento: Option<NaiveDate>,
    pub data_pagamento: Option<NaiveDate>,
    pub status: Option<String>,
    pub active: Option<bool>,
}

/// Request para criar uma conta a pagar
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePayableRequest {
    pub fornecedor_id: Option<Uuid>,

    #[validate(length(min = 1, max = 200))]
    pub descricao: String,

    pub valor: Decimal,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: Option<String>,
    pub categoria: Option<String>,
}

/// Request para atualizar uma conta a pagar
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePayableRequest {
    pub fornecedor_id: Option<Uuid>,

    #[validate(length(min = 1, max = 200))]
    pub descricao: Option<String>,

    pub valor: Option<Decimal>,
    pub data_vencimento: Option<NaiveDate>,
    pub data_pagamento: Option<NaiveDate>,
    pub status: Option<String>,
    pub categoria: Option<String>,
    pub active: Option<bool>,
}

/// Request para marcar uma conta como paga
#[derive(Debug, Default, Deserialize)]
pub struct PayAccountRequest {
    /// Data do pagamento; quando ausente, usa a data de hoje
    pub data_pagamento: Option<NaiveDate>,
}

/// Filtros de listagem de contas
#[derive(Debug, Default, Deserialize)]
pub struct AccountFilters {
    pub status: Option<String>,
    pub vencidas: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de conta a receber com os dias em atraso derivados
#[derive(Debug, Serialize)]
pub struct ReceivableResponse {
    pub id: Uuid,
    pub servico_id: Option<Uuid>,
    pub cliente_id: Uuid,
    pub valor: Decimal,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: String,
    pub dias_em_atraso: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReceivableResponse {
    pub fn from_model(conta: Receivable, hoje: NaiveDate) -> Self {
        let dias_em_atraso = overdue_days(&conta.status, conta.data_vencimento, hoje);
        Self {
            id: conta.id,
            servico_id: conta.servico_id,
            cliente_id: conta.cliente_id,
            valor: conta.valor,
            data_vencimento: conta.data_vencimento,
            data_pagamento: conta.data_pagamento,
            status: conta.status,
            dias_em_atraso,
            active: conta.active,
            created_at: conta.created_at,
            updated_at: conta.updated_at,
        }
    }
}

/// Response de conta a pagar com os dias em atraso derivados
#[derive(Debug, Serialize)]
pub struct PayableResponse {
    pub id: Uuid,
    pub fornecedor_id: Option<Uuid>,
    pub descricao: String,
    pub valor: Decimal,
    pub data_vencimento: NaiveDate,
    pub data_pagamento: Option<NaiveDate>,
    pub status: String,
    pub categoria: String,
    pub dias_em_atraso: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PayableResponse {
    pub fn from_model(conta: Payable, hoje: NaiveDate) -> Self {
        let dias_em_atraso = overdue_days(&conta.status, conta.data_vencimento, hoje);
        Self {
            id: conta.id,
            fornecedor_id: conta.fornecedor_id,
            descricao: conta.descricao,
            valor: conta.valor,
            data_vencimento: conta.data_vencimento,
            data_pagamento: conta.data_pagamento,
            status: conta.status,
            categoria: conta.categoria,
            dias_em_atraso,
            active: conta.active,
            created_at: conta.created_at,
            updated_at: conta.updated_at,
        }
    }
}

/// Request para registrar um pagamento de serviço
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServicePaymentRequest {
    pub servico_id: Uuid,

    /// dinheiro, cartao_credito, cartao_debito, cheque ou transferencia
    pub forma_pagamento: String,

    pub valor: Decimal,
    pub data: Option<NaiveDate>,
}

/// Filtros de listagem de pagamentos
#[derive(Debug, Default, Deserialize)]
pub struct ServicePaymentFilters {
    pub servico_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de pagamento de serviço
#[derive(Debug, Serialize)]
pub struct ServicePaymentResponse {
    pub id: Uuid,
    pub servico_id: Uuid,
    pub forma_pagamento: String,
    pub valor: Decimal,
    pub data: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<ServicePayment> for ServicePaymentResponse {
    fn from(pagamento: ServicePayment) -> Self {
        Self {
            id: pagamento.id,
            servico_id: pagamento.servico_id,
            forma_pagamento: pagamento.forma_pagamento,
            valor: pagamento.valor,
            data: pagamento.data,
            created_at: pagamento.created_at,
        }
    }
}

/// Resumo financeiro do mês corrente
#[derive(Debug, Serialize)]
pub struct FinanceSummaryResponse {
    pub total_receber: Decimal,
    pub total_recebido_mes: Decimal,
    pub contas_vencidas_receber: i64,
    pub total_pagar: Decimal,
    pub total_pago_mes: Decimal,
    pub contas_vencidas_pagar: i64,
    pub saldo_mes: Decimal,
}
