//! DTOs de Agendamento

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::appointment::AppointmentRow;

/// Request para criar um agendamento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    pub veiculo_id: Uuid,
    pub cliente_id: Uuid,
    pub scheduled_at: DateTime<Utc>,

    #[validate(length(max = 100))]
    pub mecanico: Option<String>,

    pub descricao_problema: Option<String>,
    pub status: Option<String>,
}

/// Request para atualizar um agendamento
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAppointmentRequest {
    pub veiculo_id: Option<Uuid>,
    pub cliente_id: Option<Uuid>,
    pub scheduled_at: Option<DateTime<Utc>>,

    #[validate(length(max = 100))]
    pub mecanico: Option<String>,

    pub descricao_problema: Option<String>,
    pub status: Option<String>,
    pub active: Option<bool>,
}

/// Filtros de listagem de agendamentos. As datas limitam o intervalo
/// de `scheduled_at` (formato YYYY-MM-DD).
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de agendamento com placa e cliente resolvidos
#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub veiculo_id: Uuid,
    pub cliente_id: Uuid,
    pub placa: String,
    pub cliente_nome: String,
    pub scheduled_at: DateTime<Utc>,
    pub mecanico: Option<String>,
    pub descricao_problema: Option<String>,
    pub status: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AppointmentRow> for AppointmentResponse {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id,
            veiculo_id: row.veiculo_id,
            cliente_id: row.cliente_id,
            placa: row.placa,
            cliente_nome: row.cliente_nome,
            scheduled_at: row.scheduled_at,
            mecanico: row.mecanico,
            descricao_problema: row.descricao_problema,
            status: row.status,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
