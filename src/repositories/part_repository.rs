//! Repositório de Peças

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::dto::inventory_dto::PartFilters;
use crate::models::part::Part;
use crate::utils::errors::AppResult;

pub struct PartRepository {
    pool: PgPool,
}

impl PartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        codigo: String,
        descricao: String,
        fabricante: Option<String>,
        categoria: String,
        preco_compra: Decimal,
        preco_venda: Decimal,
        quantidade_minima: i32,
        quantidade_atual: i32,
        fornecedor_id: Option<Uuid>,
    ) -> AppResult<Part> {
        let now = Utc::now();
        let part = sqlx::query_as::<_, Part>(
            r#"
            INSERT INTO pecas (id, codigo, descricao, fabricante, categoria, preco_compra, preco_venda,
                               quantidade_minima, quantidade_atual, fornecedor_id, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, TRUE, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(codigo)
        .bind(descricao)
        .bind(fabricante)
        .bind(categoria)
        .bind(preco_compra)
        .bind(preco_venda)
        .bind(quantidade_minima)
        .bind(quantidade_atual)
        .bind(fornecedor_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(part)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Part>> {
        let part = sqlx::query_as::<_, Part>("SELECT * FROM pecas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(part)
    }

    /// Lista peças com filtros, ordenadas por descrição
    pub async fn list(&self, filters: &PartFilters) -> AppResult<Vec<Part>> {
        let mut query = QueryBuilder::new("SELECT * FROM pecas WHERE 1 = 1");

        if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            query.push(" AND (codigo ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR descricao ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR fabricante ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        if let Some(categoria) = filters.categoria.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND categoria = ");
            query.push_bind(categoria.to_string());
        }

        if filters.estoque_baixo.as_deref() == Some("true") {
            query.push(" AND quantidade_atual <= quantidade_minima");
        }

        query.push(" ORDER BY descricao LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let parts = query.build_query_as::<Part>().fetch_all(&self.pool).await?;

        Ok(parts)
    }

    /// Verifica se já existe outra peça com o mesmo código
    pub async fn codigo_exists(&self, codigo: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM pecas WHERE codigo = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(codigo)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Atualiza o cadastro da peça. A quantidade atual só muda via
    /// movimentações de estoque.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        codigo: Option<String>,
        descricao: Option<String>,
        fabricante: Option<String>,
        categoria: Option<String>,
        preco_compra: Option<Decimal>,
        preco_venda: Option<Decimal>,
        quantidade_minima: Option<i32>,
        fornecedor_id: Option<Uuid>,
        active: Option<bool>,
    ) -> AppResult<Option<Part>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let part = sqlx::query_as::<_, Part>(
            r#"
            UPDATE pecas
            SET codigo = $2, descricao = $3, fabricante = $4, categoria = $5, preco_compra = $6,
                preco_venda = $7, quantidade_minima = $8, fornecedor_id = $9, active = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(codigo.unwrap_or(current.codigo))
        .bind(descricao.unwrap_or(current.descricao))
        .bind(fabricante.or(current.fabricante))
        .bind(categoria.unwrap_or(current.categoria))
        .bind(preco_compra.unwrap_or(current.preco_compra))
        .bind(preco_venda.unwrap_or(current.preco_venda))
        .bind(quantidade_minima.unwrap_or(current.quantidade_minima))
        .bind(fornecedor_id.or(current.fornecedor_id))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(part))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM pecas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
