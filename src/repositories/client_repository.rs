//! Repositório de Clientes

use chrono::Utc;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::client_dto::ClientFilters;
use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::models::client::Client;
use crate::utils::errors::AppResult;

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: String,
        cpf_cnpj: String,
        email: Option<String>,
        telefone: String,
        endereco: String,
        cidade: String,
        estado: String,
        cep: String,
    ) -> AppResult<Client> {
        let now = Utc::now();
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clientes (id, nome, cpf_cnpj, email, telefone, endereco, cidade, estado, cep, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(cpf_cnpj)
        .bind(email)
        .bind(telefone)
        .bind(endereco)
        .bind(cidade)
        .bind(estado)
        .bind(cep)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    /// Lista clientes com filtro de busca textual, ordenados por nome
    pub async fn list(&self, filters: &ClientFilters) -> AppResult<Vec<Client>> {
        let mut query = QueryBuilder::new("SELECT * FROM clientes WHERE 1 = 1");

        if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            query.push(" AND (nome ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR cpf_cnpj ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR email ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR telefone ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        query.push(" ORDER BY nome LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let clients = query.build_query_as::<Client>().fetch_all(&self.pool).await?;

        Ok(clients)
    }

    /// Verifica se já existe outro cliente com o mesmo CPF/CNPJ
    pub async fn cpf_cnpj_exists(&self, cpf_cnpj: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM clientes WHERE cpf_cnpj = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(cpf_cnpj)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nome: Option<String>,
        cpf_cnpj: Option<String>,
        email: Option<String>,
        telefone: Option<String>,
        endereco: Option<String>,
        cidade: Option<String>,
        estado: Option<String>,
        cep: Option<String>,
        active: Option<bool>,
    ) -> AppResult<Option<Client>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clientes
            SET nome = $2, cpf_cnpj = $3, email = $4, telefone = $5, endereco = $6,
                cidade = $7, estado = $8, cep = $9, active = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome.unwrap_or(current.nome))
        .bind(cpf_cnpj.unwrap_or(current.cpf_cnpj))
        .bind(email.or(current.email))
        .bind(telefone.unwrap_or(current.telefone))
        .bind(endereco.unwrap_or(current.endereco))
        .bind(cidade.unwrap_or(current.cidade))
        .bind(estado.unwrap_or(current.estado))
        .bind(cep.unwrap_or(current.cep))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(client))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
