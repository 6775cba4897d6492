//! Repositório de Fornecedores

use chrono::Utc;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::dto::inventory_dto::SupplierFilters;
use crate::models::part::Supplier;
use crate::utils::errors::AppResult;

pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: String,
        contato: Option<String>,
        email: Option<String>,
        telefone: Option<String>,
    ) -> AppResult<Supplier> {
        let now = Utc::now();
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO fornecedores (id, nome, contato, email, telefone, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(contato)
        .bind(email)
        .bind(telefone)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(supplier)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>("SELECT * FROM fornecedores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(supplier)
    }

    /// Lista fornecedores, ordenados por nome
    pub async fn list(&self, filters: &SupplierFilters) -> AppResult<Vec<Supplier>> {
        let mut query = QueryBuilder::new("SELECT * FROM fornecedores WHERE 1 = 1");

        if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            query.push(" AND nome ILIKE ");
            query.push_bind(pattern);
        }

        query.push(" ORDER BY nome LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let suppliers = query
            .build_query_as::<Supplier>()
            .fetch_all(&self.pool)
            .await?;

        Ok(suppliers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nome: Option<String>,
        contato: Option<String>,
        email: Option<String>,
        telefone: Option<String>,
        active: Option<bool>,
    ) -> AppResult<Option<Supplier>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            UPDATE fornecedores
            SET nome = $2, contato = $3, email = $4, telefone = $5, active = $6, updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome.unwrap_or(current.nome))
        .bind(contato.or(current.contato))
        .bind(email.or(current.email))
        .bind(telefone.or(current.telefone))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(supplier))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM fornecedores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
