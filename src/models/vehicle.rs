//! Modelo de Veículo
//!
//! Este módulo contém o struct Veiculo e o enum de status.
//! A placa é única (formato antigo ABC1234 ou Mercosul ABC1D23).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status do veículo - armazenado como TEXT snake_case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    InUse,
    InMaintenance,
    Decommissioned,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::InUse => "em_uso",
            VehicleStatus::InMaintenance => "em_manutencao",
            VehicleStatus::Decommissioned => "descartado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "em_uso" => Some(VehicleStatus::InUse),
            "em_manutencao" => Some(VehicleStatus::InMaintenance),
            "descartado" => Some(VehicleStatus::Decommissioned),
            _ => None,
        }
    }
}

/// Veículo - mapeia a tabela veiculos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub cor: Option<String>,
    pub chassis: Option<String>,
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
            VehicleStatus::InUse,
            VehicleStatus::InMaintenance,
            VehicleStatus::Decommissioned,
        ] {
            assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(VehicleStatus::parse("quebrado"), None);
    }
}
