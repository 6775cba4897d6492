//! DTOs da API
//!
//! Requests, responses e filtros de listagem de cada módulo.

pub mod appointment_dto;
pub mod client_dto;
pub mod common;
pub mod dashboard_dto;
pub mod finance_dto;
pub mod inventory_dto;
pub mod service_order_dto;
pub mod vehicle_dto;
