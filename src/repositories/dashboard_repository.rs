//! Repositório do Dashboard
//!
//! Contadores agregados da tela inicial. Cada consulta é pontual e
//! roda fora de transação, o painel tolera leituras não atômicas.

use chrono::{Datelike, Duration, NaiveDate};
use sqlx::PgPool;

use crate::utils::errors::AppResult;

/// Contadores agregados do painel
#[derive(Debug)]
pub struct DashboardCounts {
    pub total_clientes: i64,
    pub total_veiculos: i64,
    pub agendamentos_hoje: i64,
    pub agendamentos_proximos: i64,
    pub servicos_em_progresso: i64,
    pub servicos_concluidos_mes: i64,
    pub pecas_estoque_baixo: i64,
    pub contas_receber_vencidas: i64,
    pub contas_pagar_vencidas: i64,
}

pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn counts(&self, hoje: NaiveDate) -> AppResult<DashboardCounts> {
        let (total_clientes,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM clientes WHERE active")
                .fetch_one(&self.pool)
                .await?;

        let (total_veiculos,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM veiculos WHERE active")
                .fetch_one(&self.pool)
                .await?;

        let (agendamentos_hoje,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM agendamentos
            WHERE scheduled_at::date = $1 AND status IN ('agendado', 'em_progresso')
            "#,
        )
        .bind(hoje)
        .fetch_one(&self.pool)
        .await?;

        let (agendamentos_proximos,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM agendamentos
            WHERE scheduled_at::date > $1 AND scheduled_at::date <= $2 AND status = 'agendado'
            "#,
        )
        .bind(hoje)
        .bind(hoje + Duration::days(7))
        .fetch_one(&self.pool)
        .await?;

        let (servicos_em_progresso,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM servicos WHERE status = 'em_execucao'")
                .fetch_one(&self.pool)
                .await?;

        let (servicos_concluidos_mes,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM servicos
            WHERE status IN ('concluido', 'faturado')
              AND EXTRACT(MONTH FROM finished_at) = $1
              AND EXTRACT(YEAR FROM finished_at) = $2
            "#,
        )
        .bind(hoje.month() as i32)
        .bind(hoje.year())
        .fetch_one(&self.pool)
        .await?;

        let (pecas_estoque_baixo,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM pecas WHERE active AND quantidade_atual <= quantidade_minima",
        )
        .fetch_one(&self.pool)
        .await?;

        let (contas_receber_vencidas,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM contas_receber WHERE status = 'aberta' AND data_vencimento < $1",
        )
        .bind(hoje)
        .fetch_one(&self.pool)
        .await?;

        let (contas_pagar_vencidas,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM contas_pagar WHERE status = 'aberta' AND data_vencimento < $1",
        )
        .bind(hoje)
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardCounts {
            total_clientes,
            total_veiculos,
            agendamentos_hoje,
            agendamentos_proximos,
            servicos_em_progresso,
            servicos_concluidos_mes,
            pecas_estoque_baixo,
            contas_receber_vencidas,
            contas_pagar_vencidas,
        })
    }
}
