//! Camada de regras de negócio
//!
//! Os controllers validam requests, aplicam as regras do domínio e
//! convertem modelos em DTOs de resposta.

pub mod appointment_controller;
pub mod client_controller;
pub mod dashboard_controller;
pub mod finance_controller;
pub mod inventory_controller;
pub mod report_controller;
pub mod service_order_controller;
pub mod vehicle_controller;
