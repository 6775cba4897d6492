//! Repositório de Serviços e itens de orçamento
//!
//! Toda escrita que afeta o valor total (mão de obra, desconto ou
//! qualquer item de orçamento) roda numa única transação que grava o
//! dado e recalcula o total do serviço antes do commit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::dto::service_order_dto::ServiceOrderFilters;
use crate::models::service_order::{item_subtotal, order_total, EstimateItem, ServiceOrder};
use crate::utils::errors::AppResult;

pub struct ServiceOrderRepository {
    pool: PgPool,
}

impl ServiceOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        agendamento_id: Uuid,
        started_at: Option<DateTime<Utc>>,
        finished_at: Option<DateTime<Utc>>,
        descricao_trabalho: Option<String>,
        preco_mao_obra: Decimal,
        desconto: Decimal,
        status: String,
    ) -> AppResult<ServiceOrder> {
        let now = Utc::now();
        // Serviço novo não tem itens: total = max(mao_obra - desconto, 0)
        let valor_total = order_total(Decimal::ZERO, preco_mao_obra, desconto);

        let order = sqlx::query_as::<_, ServiceOrder>(
            r#"
            INSERT INTO servicos (id, agendamento_id, started_at, finished_at, descricao_trabalho,
                                  preco_mao_obra, desconto, valor_total, status, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(agendamento_id)
        .bind(started_at)
        .bind(finished_at)
        .bind(descricao_trabalho)
        .bind(preco_mao_obra)
        .bind(desconto)
        .bind(valor_total)
        .bind(status)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ServiceOrder>> {
        let order = sqlx::query_as::<_, ServiceOrder>("SELECT * FROM servicos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    /// Verifica se o agendamento já possui serviço (relação um-para-um)
    pub async fn exists_for_appointment(&self, agendamento_id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM servicos WHERE agendamento_id = $1)")
                .bind(agendamento_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Lista serviços com filtros, ordenados por criação decrescente
    pub async fn list(&self, filters: &ServiceOrderFilters) -> AppResult<Vec<ServiceOrder>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT s.* FROM servicos s
            JOIN agendamentos a ON a.id = s.agendamento_id
            JOIN veiculos v ON v.id = a.veiculo_id
            JOIN clientes c ON c.id = a.cliente_id
            WHERE 1 = 1
            "#,
        );

        if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            query.push(" AND (v.placa ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR c.nome ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR s.descricao_trabalho ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND s.status = ");
            query.push_bind(status.to_string());
        }

        query.push(" ORDER BY s.created_at DESC LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let orders = query
            .build_query_as::<ServiceOrder>()
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    /// Atualiza o serviço e recalcula o total na mesma transação
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        started_at: Option<DateTime<Utc>>,
        finished_at: Option<DateTime<Utc>>,
        descricao_trabalho: Option<String>,
        preco_mao_obra: Option<Decimal>,
        desconto: Option<Decimal>,
        status: Option<String>,
        active: Option<bool>,
    ) -> AppResult<Option<ServiceOrder>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE servicos
            SET started_at = $2, finished_at = $3, descricao_trabalho = $4,
                preco_mao_obra = $5, desconto = $6, status = $7, active = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(started_at.or(current.started_at))
        .bind(finished_at.or(current.finished_at))
        .bind(descricao_trabalho.or(current.descricao_trabalho))
        .bind(preco_mao_obra.unwrap_or(current.preco_mao_obra))
        .bind(desconto.unwrap_or(current.desconto))
        .bind(status.unwrap_or(current.status))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let order = Self::recompute_total(&mut tx, id).await?;
        tx.commit().await?;

        Ok(Some(order))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM servicos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_items(&self, servico_id: Uuid) -> AppResult<Vec<EstimateItem>> {
        let items = sqlx::query_as::<_, EstimateItem>(
            "SELECT * FROM orcamento_itens WHERE servico_id = $1 ORDER BY item",
        )
        .bind(servico_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn find_item_by_id(&self, item_id: Uuid) -> AppResult<Option<EstimateItem>> {
        let item = sqlx::query_as::<_, EstimateItem>("SELECT * FROM orcamento_itens WHERE id = $1")
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    /// Insere um item com subtotal calculado e propaga para o total
    pub async fn create_item(
        &self,
        servico_id: Uuid,
        item: String,
        quantidade: i32,
        valor_unitario: Decimal,
    ) -> AppResult<EstimateItem> {
        let now = Utc::now();
        let subtotal = item_subtotal(quantidade, valor_unitario);

        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, EstimateItem>(
            r#"
            INSERT INTO orcamento_itens (id, servico_id, item, quantidade, valor_unitario, subtotal, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(servico_id)
        .bind(item)
        .bind(quantidade)
        .bind(valor_unitario)
        .bind(subtotal)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        Self::recompute_total(&mut tx, servico_id).await?;
        tx.commit().await?;

        Ok(created)
    }

    /// Atualiza um item, recalculando subtotal e total do serviço
    pub async fn update_item(
        &self,
        item_id: Uuid,
        item: Option<String>,
        quantidade: Option<i32>,
        valor_unitario: Option<Decimal>,
    ) -> AppResult<Option<EstimateItem>> {
        let Some(current) = self.find_item_by_id(item_id).await? else {
            return Ok(None);
        };

        let quantidade = quantidade.unwrap_or(current.quantidade);
        let valor_unitario = valor_unitario.unwrap_or(current.valor_unitario);
        let subtotal = item_subtotal(quantidade, valor_unitario);

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, EstimateItem>(
            r#"
            UPDATE orcamento_itens
            SET item = $2, quantidade = $3, valor_unitario = $4, subtotal = $5, updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(item_id)
        .bind(item.unwrap_or(current.item))
        .bind(quantidade)
        .bind(valor_unitario)
        .bind(subtotal)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        Self::recompute_total(&mut tx, current.servico_id).await?;
        tx.commit().await?;

        Ok(Some(updated))
    }

    /// Remove um item e recalcula o total do serviço
    pub async fn delete_item(&self, item_id: Uuid) -> AppResult<bool> {
        let Some(current) = self.find_item_by_id(item_id).await? else {
            return Ok(false);
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM orcamento_itens WHERE id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        Self::recompute_total(&mut tx, current.servico_id).await?;
        tx.commit().await?;

        Ok(true)
    }

    /// Recalcula valor_total = max(soma dos subtotais + mao_obra - desconto, 0)
    async fn recompute_total(
        tx: &mut Transaction<'_, Postgres>,
        servico_id: Uuid,
    ) -> AppResult<ServiceOrder> {
        let (items_sum,): (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(subtotal), 0) FROM orcamento_itens WHERE servico_id = $1 AND active",
        )
        .bind(servico_id)
        .fetch_one(&mut **tx)
        .await?;

        let (preco_mao_obra, desconto): (Decimal, Decimal) =
            sqlx::query_as("SELECT preco_mao_obra, desconto FROM servicos WHERE id = $1")
                .bind(servico_id)
                .fetch_one(&mut **tx)
                .await?;

        let valor_total = order_total(items_sum, preco_mao_obra, desconto);

        let order = sqlx::query_as::<_, ServiceOrder>(
            "UPDATE servicos SET valor_total = $2 WHERE id = $1 RETURNING *",
        )
        .bind(servico_id)
        .bind(valor_total)
        .fetch_one(&mut **tx)
        .await?;

        Ok(order)
    }
}
