//! DTOs de Veículo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::utils::validation::validate_placa;

/// Request para criar um veículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub cliente_id: Uuid,

    #[validate(custom = "validate_placa")]
    pub placa: String,

    #[validate(length(min = 1, max = 50))]
    pub marca: String,

    #[validate(length(min = 1, max = 100))]
    pub modelo: String,

    #[validate(range(min = 1900, max = 2100))]
    pub ano: i32,

    #[validate(length(max = 30))]
    pub cor: Option<String>,

    #[validate(length(max = 17))]
    pub chassis: Option<String>,

    pub status: Option<String>,
}

/// Request para atualizar um veículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub cliente_id: Option<Uuid>,

    #[validate(custom = "validate_placa")]
    pub placa: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub ano: Option<i32>,

    #[validate(length(max = 30))]
    pub cor: Option<String>,

    #[validate(length(max = 17))]
    pub chassis: Option<String>,

    pub status: Option<String>,
    pub active: Option<bool>,
}

/// Filtros de listagem de veículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub cliente_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de veículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            cliente_id: vehicle.cliente_id,
            placa: vehicle.placa,
            marca: vehicle.marca,
            modelo: vehicle.modelo,
            ano: vehicle.ano,
            cor: vehicle.cor,
            chassis: vehicle.chassis,
            status: vehicle.status,
            active: vehicle.active,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
