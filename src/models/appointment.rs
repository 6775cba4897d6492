//! Modelo de Agendamento
//!
//! Agendamento de serviço ligando veículo, cliente e mecânico
//! responsável a uma data/hora. Ordenação por data decrescente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status do agendamento - armazenado como TEXT snake_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Canceled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "agendado",
            AppointmentStatus::InProgress => "em_progresso",
            AppointmentStatus::Completed => "concluido",
            AppointmentStatus::Canceled => "cancelado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "agendado" => Some(AppointmentStatus::Scheduled),
            "em_progresso" => Some(AppointmentStatus::InProgress),
            "concluido" => Some(AppointmentStatus::Completed),
            "cancelado" => Some(AppointmentStatus::Canceled),
            _ => None,
        }
    }
}

/// Agendamento - mapeia a tabela agendamentos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub veiculo_id: Uuid,
    pub cliente_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub mecanico: Option<String>,
    pub descricao_problema: Option<String>,
    pub status: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Linha de listagem com placa e nome do cliente já resolvidos
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentRow {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ida_e_volta() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::InProgress,
            AppointmentStatus::Completed,
            AppointmentStatus::Canceled,
        ] {
            assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AppointmentStatus::parse("pendente"), None);
    }
}
