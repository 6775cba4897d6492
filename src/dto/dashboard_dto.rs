//! DTO do dashboard

use serde::Serialize;

use crate::dto::appointment_dto::AppointmentResponse;

/// Estatísticas gerais exibidas na página inicial
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_clientes: i64,
    pub total_veiculos: i64,
    pub agendamentos_hoje: i64,
    pub agendamentos_proximos: i64,
    pub servicos_em_progresso: i64,
    pub servicos_concluidos_mes: i64,
    pub pecas_estoque_baixo: i64,
    pub contas_receber_vencidas: i64,
    pub contas_pagar_vencidas: i64,
    pub agendamentos_recentes: Vec<AppointmentResponse>,
}
