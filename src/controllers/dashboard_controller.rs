//! Controller do Dashboard

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::appointment_dto::AppointmentResponse;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::dashboard_repository::DashboardRepository;
use crate::utils::errors::AppResult;

/// Quantidade de agendamentos recentes exibidos no painel
const RECENT_APPOINTMENTS: i64 = 10;

pub struct DashboardController {
    repository: DashboardRepository,
    appointments: AppointmentRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DashboardRepository::new(pool.clone()),
            appointments: AppointmentRepository::new(pool),
        }
    }

    pub async fn overview(&self) -> AppResult<DashboardResponse> {
        let hoje = Utc::now().date_naive();
        let counts = self.repository.counts(hoje).await?;
        let recentes = self.appointments.recent(RECENT_APPOINTMENTS).await?;

        Ok(DashboardResponse {
            total_clientes: counts.total_clientes,
            total_veiculos: counts.total_veiculos,
            agendamentos_hoje: counts.agendamentos_hoje,
            agendamentos_proximos: counts.agendamentos_proximos,
            servicos_em_progresso: counts.servicos_em_progresso,
            servicos_concluidos_mes: counts.servicos_concluidos_mes,
            pecas_estoque_baixo: counts.pecas_estoque_baixo,
            contas_receber_vencidas: counts.contas_receber_vencidas,
            contas_pagar_vencidas: counts.contas_pagar_vencidas,
            agendamentos_recentes: recentes
                .into_iter()
                .map(AppointmentResponse::from)
                .collect(),
        })
    }
}
