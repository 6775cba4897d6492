//! Repositório de Movimentações de estoque
//!
//! A criação grava o registro e aplica o delta sobre a quantidade da
//! peça na mesma transação. Saída sem estoque suficiente aborta a
//! transação e o estoque permanece inalterado.

use chrono::Utc;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::dto::inventory_dto::StockMovementFilters;
use crate::models::stock_movement::{apply_movement, MovementKind, StockMovement};
use crate::utils::errors::{AppError, AppResult};

pub struct StockMovementRepository {
    pool: PgPool,
}

impl StockMovementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registra a movimentação e atualiza o estoque da peça
    pub async fn create(
        &self,
        peca_id: Uuid,
        kind: MovementKind,
        quantidade: i32,
        motivo: Option<String>,
        responsavel: Option<String>,
    ) -> AppResult<StockMovement> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let (quantidade_atual,): (i32,) =
            sqlx::query_as("SELECT quantidade_atual FROM pecas WHERE id = $1")
                .bind(peca_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Peça não encontrada".to_string()))?;

        let nova_quantidade = apply_movement(quantidade_atual, kind, quantidade)?;

        let movement = sqlx::query_as::<_, StockMovement>(
            r#"
            INSERT INTO movimentacoes (id, peca_id, tipo, quantidade, motivo, responsavel, moved_at, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(peca_id)
        .bind(kind.as_str())
        .bind(quantidade)
        .bind(motivo)
        .bind(responsavel)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE pecas SET quantidade_atual = $2, updated_at = $3 WHERE id = $1")
            .bind(peca_id)
            .bind(nova_quantidade)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(movement)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StockMovement>> {
        let movement =
            sqlx::query_as::<_, StockMovement>("SELECT * FROM movimentacoes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(movement)
    }

    /// Lista movimentações, mais recentes primeiro
    pub async fn list(&self, filters: &StockMovementFilters) -> AppResult<Vec<StockMovement>> {
        let mut query = QueryBuilder::new("SELECT * FROM movimentacoes WHERE 1 = 1");

        if let Some(peca_id) = filters.peca_id {
            query.push(" AND peca_id = ");
            query.push_bind(peca_id);
        }

        if let Some(tipo) = filters.tipo.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND tipo = ");
            query.push_bind(tipo.to_string());
        }

        query.push(" ORDER BY moved_at DESC LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let movements = query
            .build_query_as::<StockMovement>()
            .fetch_all(&self.pool)
            .await?;

        Ok(movements)
    }
}
