//! Repositório do financeiro
//!
//! Contas a receber, contas a pagar, pagamentos de serviço e os
//! agregados do resumo financeiro do mês corrente.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::dto::finance_dto::{AccountFilters, ServicePaymentFilters};
use crate::models::account::{Payable, Receivable, ServicePayment};
use crate::utils::errors::AppResult;

/// Agregados do resumo financeiro
#[derive(Debug)]
pub struct FinanceSummary {
    pub total_receber: Decimal,
    pub total_recebido_mes: Decimal,
    pub contas_vencidas_receber: i64,
    pub total_pagar: Decimal,
    pub total_pago_mes: Decimal,
    pub contas_vencidas_pagar: i64,
}

pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Contas a receber ---

    pub async fn create_receivable(
        &self,
        servico_id: Option<Uuid>,
        cliente_id: Uuid,
        valor: Decimal,
        data_vencimento: NaiveDate,
        data_pagamento: Option<NaiveDate>,
        status: String,
    ) -> AppResult<Receivable> {
        let now = Utc::now();
        let conta = sqlx::query_as::<_, Receivable>(
            r#"
            INSERT INTO contas_receber (id, servico_id, cliente_id, valor, data_vencimento, data_pagamento, status, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(servico_id)
        .bind(cliente_id)
        .bind(valor)
        .bind(data_vencimento)
        .bind(data_pagamento)
        .bind(status)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn find_receivable(&self, id: Uuid) -> AppResult<Option<Receivable>> {
        let conta = sqlx::query_as::<_, Receivable>("SELECT * FROM contas_receber WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(conta)
    }

    /// Lista contas a receber, vencimento mais recente primeiro
    pub async fn list_receivables(
        &self,
        filters: &AccountFilters,
        hoje: NaiveDate,
    ) -> AppResult<Vec<Receivable>> {
        let mut query = QueryBuilder::new("SELECT * FROM contas_receber WHERE 1 = 1");
        Self::push_account_filters(&mut query, filters, hoje);

        let contas = query
            .build_query_as::<Receivable>()
            .fetch_all(&self.pool)
            .await?;

        Ok(contas)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_receivable(
        &self,
        id: Uuid,
        servico_id: Option<Uuid>,
        cliente_id: Option<Uuid>,
        valor: Option<Decimal>,
        data_vencimento: Option<NaiveDate>,
        data_pagamento: Option<NaiveDate>,
        status: Option<String>,
        active: Option<bool>,
    ) -> AppResult<Option<Receivable>> {
        let Some(current) = self.find_receivable(id).await? else {
            return Ok(None);
        };

        let conta = sqlx::query_as::<_, Receivable>(
            r#"
            UPDATE contas_receber
            SET servico_id = $2, cliente_id = $3, valor = $4, data_vencimento = $5,
                data_pagamento = $6, status = $7, active = $8, updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(servico_id.or(current.servico_id))
        .bind(cliente_id.unwrap_or(current.cliente_id))
        .bind(valor.unwrap_or(current.valor))
        .bind(data_vencimento.unwrap_or(current.data_vencimento))
        .bind(data_pagamento.or(current.data_pagamento))
        .bind(status.unwrap_or(current.status))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(conta))
    }

    /// Marca a conta a receber como paga
    pub async fn pay_receivable(
        &self,
        id: Uuid,
        data_pagamento: NaiveDate,
    ) -> AppResult<Option<Receivable>> {
        let conta = sqlx::query_as::<_, Receivable>(
            "UPDATE contas_receber SET status = 'paga', data_pagamento = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data_pagamento)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn delete_receivable(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contas_receber WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- Contas a pagar ---

    #[allow(clippy::too_many_arguments)]
    pub async fn create_payable(
        &self,
        fornecedor_id: Option<Uuid>,
        descricao: String,
        valor: Decimal,
        data_vencimento: NaiveDate,
        data_pagamento: Option<NaiveDate>,
        status: String,
        categoria: String,
    ) -> AppResult<Payable> {
        let now = Utc::now();
        let conta = sqlx::query_as::<_, Payable>(
            r#"
            INSERT INTO contas_pagar (id, fornecedor_id, descricao, valor, data_vencimento, data_pagamento, status, categoria, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(fornecedor_id)
        .bind(descricao)
        .bind(valor)
        .bind(data_vencimento)
        .bind(data_pagamento)
        .bind(status)
        .bind(categoria)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn find_payable(&self, id: Uuid) -> AppResult<Option<Payable>> {
        let conta = sqlx::query_as::<_, Payable>("SELECT * FROM contas_pagar WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(conta)
    }

    /// Lista contas a pagar, vencimento mais recente primeiro
    pub async fn list_payables(
        &self,
        filters: &AccountFilters,
        hoje: NaiveDate,
    ) -> AppResult<Vec<Payable>> {
        let mut query = QueryBuilder::new("SELECT * FROM contas_pagar WHERE 1 = 1");
        Self::push_account_filters(&mut query, filters, hoje);

        let contas = query
            .build_query_as::<Payable>()
            .fetch_all(&self.pool)
            .await?;

        Ok(contas)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_payable(
        &self,
        id: Uuid,
        fornecedor_id: Option<Uuid>,
        descricao: Option<String>,
        valor: Option<Decimal>,
        data_vencimento: Option<NaiveDate>,
        data_pagamento: Option<NaiveDate>,
        status: Option<String>,
        categoria: Option<String>,
        active: Option<bool>,
    ) -> AppResult<Option<Payable>> {
        let Some(current) = self.find_payable(id).await? else {
            return Ok(None);
        };

        let conta = sqlx::query_as::<_, Payable>(
            r#"
            UPDATE contas_pagar
            SET fornecedor_id = $2, descricao = $3, valor = $4, data_vencimento = $5,
                data_pagamento = $6, status = $7, categoria = $8, active = $9, updated_at = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(fornecedor_id.or(current.fornecedor_id))
        .bind(descricao.unwrap_or(current.descricao))
        .bind(valor.unwrap_or(current.valor))
        .bind(data_vencimento.unwrap_or(current.data_vencimento))
        .bind(data_pagamento.or(current.data_pagamento))
        .bind(status.unwrap_or(current.status))
        .bind(categoria.unwrap_or(current.categoria))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(conta))
    }

    /// Marca a conta a pagar como paga
    pub async fn pay_payable(
        &self,
        id: Uuid,
        data_pagamento: NaiveDate,
    ) -> AppResult<Option<Payable>> {
        let conta = sqlx::query_as::<_, Payable>(
            "UPDATE contas_pagar SET status = 'paga', data_pagamento = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data_pagamento)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(conta)
    }

    pub async fn delete_payable(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contas_pagar WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- Pagamentos de serviço ---

    pub async fn create_payment(
        &self,
        servico_id: Uuid,
        forma_pagamento: String,
        valor: Decimal,
        data: NaiveDate,
    ) -> AppResult<ServicePayment> {
        let now = Utc::now();
        let pagamento = sqlx::query_as::<_, ServicePayment>(
            r#"
            INSERT INTO pagamentos_servico (id, servico_id, forma_pagamento, valor, data, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(servico_id)
        .bind(forma_pagamento)
        .bind(valor)
        .bind(data)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(pagamento)
    }

    /// Lista pagamentos de serviço, mais recentes primeiro
    pub async fn list_payments(
        &self,
        filters: &ServicePaymentFilters,
    ) -> AppResult<Vec<ServicePayment>> {
        let mut query = QueryBuilder::new("SELECT * FROM pagamentos_servico WHERE 1 = 1");

        if let Some(servico_id) = filters.servico_id {
            query.push(" AND servico_id = ");
            query.push_bind(servico_id);
        }

        query.push(" ORDER BY data DESC LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let pagamentos = query
            .build_query_as::<ServicePayment>()
            .fetch_all(&self.pool)
            .await?;

        Ok(pagamentos)
    }

    // --- Resumo financeiro ---

    /// Agregados do mês corrente
    pub async fn finance_summary(&self, hoje: NaiveDate) -> AppResult<FinanceSummary> {
        let mes = hoje.month() as i32;
        let ano = hoje.year();

        let (total_receber,): (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(valor), 0) FROM contas_receber WHERE status = 'aberta'",
        )
        .fetch_one(&self.pool)
        .await?;

        let (total_recebido_mes,): (Decimal,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(valor), 0) FROM contas_receber
            WHERE status = 'paga'
              AND EXTRACT(MONTH FROM data_pagamento) = $1
              AND EXTRACT(YEAR FROM data_pagamento) = $2
            "#,
        )
        .bind(mes)
        .bind(ano)
        .fetch_one(&self.pool)
        .await?;

        let (contas_vencidas_receber,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM contas_receber WHERE status = 'aberta' AND data_vencimento < $1",
        )
        .bind(hoje)
        .fetch_one(&self.pool)
        .await?;

        let (total_pagar,): (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(valor), 0) FROM contas_pagar WHERE status = 'aberta'",
        )
        .fetch_one(&self.pool)
        .await?;

        let (total_pago_mes,): (Decimal,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(valor), 0) FROM contas_pagar
            WHERE status = 'paga'
              AND EXTRACT(MONTH FROM data_pagamento) = $1
              AND EXTRACT(YEAR FROM data_pagamento) = $2
            "#,
        )
        .bind(mes)
        .bind(ano)
        .fetch_one(&self.pool)
        .await?;

        let (contas_vencidas_pagar,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM contas_pagar WHERE status = 'aberta' AND data_vencimento < $1",
        )
        .bind(hoje)
        .fetch_one(&self.pool)
        .await?;

        Ok(FinanceSummary {
            total_receber,
            total_recebido_mes,
            contas_vencidas_receber,
            total_pagar,
            total_pago_mes,
            contas_vencidas_pagar,
        })
    }

    /// Filtros comuns de status e vencidas, com ordenação e paginação
    fn push_account_filters(
        query: &mut QueryBuilder<'_, sqlx::Postgres>,
        filters: &AccountFilters,
        hoje: NaiveDate,
    ) {
        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND status = ");
            query.push_bind(status.to_string());
        }

        if filters.vencidas.as_deref() == Some("true") {
            query.push(" AND status = 'aberta' AND data_vencimento < ");
            query.push_bind(hoje);
        }

        query.push(" ORDER BY data_vencimento DESC LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));
    }
}
