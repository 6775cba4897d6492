//! Repositório de Veículos

use chrono::Utc;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        cliente_id: Uuid,
        placa: String,
        marca: String,
        modelo: String,
        ano: i32,
        cor: Option<String>,
        chassis: Option<String>,
        status: String,
    ) -> AppResult<Vehicle> {
        let now = Utc::now();
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO veiculos (id, cliente_id, placa, marca, modelo, ano, cor, chassis, status, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(cliente_id)
        .bind(placa)
        .bind(marca)
        .bind(modelo)
        .bind(ano)
        .bind(cor)
        .bind(chassis)
        .bind(status)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Conta os veículos ativos de um cliente
    pub async fn count_active_for_client(&self, cliente_id: Uuid) -> AppResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM veiculos WHERE cliente_id = $1 AND active")
                .bind(cliente_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM veiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Lista veículos com filtros, ordenados por placa
    pub async fn list(&self, filters: &VehicleFilters) -> AppResult<Vec<Vehicle>> {
        let mut query = QueryBuilder::new("SELECT * FROM veiculos WHERE 1 = 1");

        if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            query.push(" AND (placa ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR marca ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR modelo ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND status = ");
            query.push_bind(status.to_string());
        }

        if let Some(cliente_id) = filters.cliente_id {
            query.push(" AND cliente_id = ");
            query.push_bind(cliente_id);
        }

        query.push(" ORDER BY placa LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let vehicles = query.build_query_as::<Vehicle>().fetch_all(&self.pool).await?;

        Ok(vehicles)
    }

    /// Verifica se já existe outro veículo com a mesma placa
    pub async fn placa_exists(&self, placa: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM veiculos WHERE placa = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(placa)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        cliente_id: Option<Uuid>,
        placa: Option<String>,
        marca: Option<String>,
        modelo: Option<String>,
        ano: Option<i32>,
        cor: Option<String>,
        chassis: Option<String>,
        status: Option<String>,
        active: Option<bool>,
    ) -> AppResult<Option<Vehicle>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE veiculos
            SET cliente_id = $2, placa = $3, marca = $4, modelo = $5, ano = $6,
                cor = $7, chassis = $8, status = $9, active = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(cliente_id.unwrap_or(current.cliente_id))
        .bind(placa.unwrap_or(current.placa))
        .bind(marca.unwrap_or(current.marca))
        .bind(modelo.unwrap_or(current.modelo))
        .bind(ano.unwrap_or(current.ano))
        .bind(cor.or(current.cor))
        .bind(chassis.or(current.chassis))
        .bind(status.unwrap_or(current.status))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(vehicle))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM veiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
