//! Repositório de Agendamentos
//!
//! As consultas de listagem e detalhe juntam veículo e cliente para
//! devolver placa e nome já resolvidos.

use chrono::{NaiveDate, Utc};
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::appointment_dto::AppointmentFilters;
use crate::dto::common::DEFAULT_PAGE_SIZE;
use crate::models::appointment::{Appointment, AppointmentRow};
use crate::utils::errors::AppResult;

const SELECT_ROW: &str = r#"
    SELECT a.id, a.veiculo_id, a.cliente_id, v.placa, c.nome AS cliente_nome,
           a.scheduled_at, a.mecanico, a.descricao_problema, a.status,
           a.active, a.created_at, a.updated_at
    FROM agendamentos a
    JOIN veiculos v ON v.id = a.veiculo_id
    JOIN clientes c ON c.id = a.cliente_id
"#;

pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        veiculo_id: Uuid,
        cliente_id: Uuid,
        scheduled_at: chrono::DateTime<Utc>,
        mecanico: Option<String>,
        descricao_problema: Option<String>,
        status: String,
    ) -> AppResult<Appointment> {
        let now = Utc::now();
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO agendamentos (id, veiculo_id, cliente_id, scheduled_at, mecanico, descricao_problema, status, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(veiculo_id)
        .bind(cliente_id)
        .bind(scheduled_at)
        .bind(mecanico)
        .bind(descricao_problema)
        .bind(status)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(appointment)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        let appointment =
            sqlx::query_as::<_, Appointment>("SELECT * FROM agendamentos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(appointment)
    }

    pub async fn find_row_by_id(&self, id: Uuid) -> AppResult<Option<AppointmentRow>> {
        let sql = format!("{} WHERE a.id = $1", SELECT_ROW);
        let row = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Lista agendamentos com filtros, ordenados por data decrescente
    pub async fn list(
        &self,
        filters: &AppointmentFilters,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
    ) -> AppResult<Vec<AppointmentRow>> {
        let mut query = QueryBuilder::new(SELECT_ROW);
        query.push(" WHERE 1 = 1");

        if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            query.push(" AND (v.placa ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR c.nome ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR a.descricao_problema ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(" AND a.status = ");
            query.push_bind(status.to_string());
        }

        if let Some(inicio) = data_inicio {
            query.push(" AND a.scheduled_at::date >= ");
            query.push_bind(inicio);
        }

        if let Some(fim) = data_fim {
            query.push(" AND a.scheduled_at::date <= ");
            query.push_bind(fim);
        }

        query.push(" ORDER BY a.scheduled_at DESC LIMIT ");
        query.push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE));
        query.push(" OFFSET ");
        query.push_bind(filters.offset.unwrap_or(0));

        let rows = query
            .build_query_as::<AppointmentRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Agendamentos mais recentes para o dashboard
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<AppointmentRow>> {
        let sql = format!(
            "{} WHERE a.active ORDER BY a.scheduled_at DESC LIMIT $1",
            SELECT_ROW
        );
        let rows = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        veiculo_id: Option<Uuid>,
        cliente_id: Option<Uuid>,
        scheduled_at: Option<chrono::DateTime<Utc>>,
        mecanico: Option<String>,
        descricao_problema: Option<String>,
        status: Option<String>,
        active: Option<bool>,
    ) -> AppResult<Option<Appointment>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE agendamentos
            SET veiculo_id = $2, cliente_id = $3, scheduled_at = $4, mecanico = $5,
                descricao_problema = $6, status = $7, active = $8, updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(veiculo_id.unwrap_or(current.veiculo_id))
        .bind(cliente_id.unwrap_or(current.cliente_id))
        .bind(scheduled_at.unwrap_or(current.scheduled_at))
        .bind(mecanico.or(current.mecanico))
        .bind(descricao_problema.or(current.descricao_problema))
        .bind(status.unwrap_or(current.status))
        .bind(active.unwrap_or(current.active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(appointment))
    }

    /// Marca o agendamento como concluído
    pub async fn mark_completed(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(
            "UPDATE agendamentos SET status = 'concluido', updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(appointment)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM agendamentos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
